//! Core token types produced by GraphQL lexers and consumed by the parser,
//! plus the decoders that turn literal token text into values.

mod graphql_number_literal;
mod graphql_string_cooking;
mod graphql_token;
mod graphql_token_kind;

pub use graphql_number_literal::classify_number_literal;
pub use graphql_number_literal::scan_number_literal;
pub use graphql_number_literal::NumberLiteralError;
pub use graphql_number_literal::NumberLiteralKind;
pub use graphql_string_cooking::cook_block_string;
pub use graphql_string_cooking::cook_quoted_string;
pub use graphql_string_cooking::cook_string_literal;
pub use graphql_string_cooking::dedent_block_string_lines;
pub use graphql_string_cooking::split_block_string_lines;
pub use graphql_token::GraphQLToken;
pub use graphql_token_kind::GraphQLTokenKind;

#[cfg(test)]
mod tests;
