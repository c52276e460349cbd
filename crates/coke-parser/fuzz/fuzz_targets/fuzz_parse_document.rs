#![no_main]

use coke_parser::GraphQLParser;
use coke_parser::ast::AstNode;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(doc) = GraphQLParser::new(s).parse_document() else {
        return;
    };
    // Anything accepted must reprint to text that parses again.
    let printed = doc.to_source(None);
    if let Err(err) = GraphQLParser::new(&printed).parse_document() {
        panic!(
            "canonical print failed to reparse:\n{}\n{}",
            printed,
            err.format_detailed(Some(&printed)),
        );
    }
});
