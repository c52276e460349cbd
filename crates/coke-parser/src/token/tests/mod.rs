mod graphql_token_kind_tests;
