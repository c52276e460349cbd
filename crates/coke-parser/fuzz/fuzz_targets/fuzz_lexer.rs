#![no_main]

use coke_parser::token::GraphQLTokenKind;
use coke_parser::token_source::StrGraphQLTokenSource;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let mut num_eof = 0;
    for token in StrGraphQLTokenSource::new(s) {
        assert!(token.span.byte_range().end <= s.len());
        if matches!(token.kind, GraphQLTokenKind::Eof) {
            num_eof += 1;
        }
    }
    assert_eq!(num_eof, 1);
});
