use crate::codec::{self, BlockKind};
use crate::config::Config;
use crate::error::Result;
use crate::model::{Document, Transaction};
use crate::syntax::reader::FieldReader;
use crate::syntax::tokenizer::{Token, TokenKind};

/// Reads a whole document. Loops over headers, dispatches each recognized
/// block to its decoder, and skips unrecognized blocks wholesale. The most
/// recently decoded account record is the "current account": transaction
/// blocks decoded before the next account header belong to it rather than
/// to the document's flat collections.
pub fn read_document(text: &str, config: &Config) -> Result<Document> {
    let mut r = FieldReader::new(text, config);
    let mut doc = Document::default();
    let mut current_account: Option<usize> = None;
    r.advance()?;
    loop {
        if matches!(r.current(), Token::EndOfFile) {
            break;
        }
        let (name, value) = r.header()?;
        let kind = match codec::block_kind(name, value) {
            Some(kind) => kind,
            None => {
                r.move_to_next(TokenKind::Header)?;
                continue;
            }
        };
        r.advance()?;
        match kind {
            BlockKind::Transactions(account_type) => {
                while record_pending(&r) {
                    let t = codec::bank::decode(&mut r, account_type)?;
                    match current_account {
                        Some(i) => doc.accounts[i].transactions.push(Transaction::Bank(t)),
                        None => doc.transactions.push(t),
                    }
                }
            }
            BlockKind::Investments => {
                while record_pending(&r) {
                    let t = codec::investment::decode(&mut r)?;
                    match current_account {
                        Some(i) => doc.accounts[i].transactions.push(Transaction::Investment(t)),
                        None => doc.investments.push(t),
                    }
                }
            }
            BlockKind::Categories => {
                while record_pending(&r) {
                    doc.categories.push(codec::category::decode(&mut r)?);
                }
            }
            BlockKind::Classes => {
                while record_pending(&r) {
                    doc.classes.push(codec::class::decode(&mut r)?);
                }
            }
            BlockKind::Memorized => {
                while record_pending(&r) {
                    doc.memorized.push(codec::memorized::decode(&mut r)?);
                }
            }
            BlockKind::Prices => {
                while record_pending(&r) {
                    doc.prices.push(codec::price::decode(&mut r)?);
                }
            }
            BlockKind::Accounts => {
                while record_pending(&r) {
                    doc.accounts.push(codec::account::decode(&mut r)?);
                    current_account = Some(doc.accounts.len() - 1);
                }
            }
        }
    }
    Ok(doc)
}

fn record_pending(r: &FieldReader) -> bool {
    r.at_field() || matches!(r.current(), Token::EndOfRecord)
}
