mod ast_test_utils;
