//! List command: registry indices of a mode.

use sentir::labels::Mode;
use sentir::toolkit::{document_registry, sentence_registry};

pub(crate) fn run(mode: Mode) {
    println!("Sentence level ({mode}):");
    for (index, name) in sentence_registry(mode).names().enumerate() {
        println!("  {index} => {name}");
    }
    println!("Document level:");
    for (index, name) in document_registry().names().enumerate() {
        println!("  {index} => {name}");
    }
}
