//! Edge case tests for lsc-lex
