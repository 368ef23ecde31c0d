//! Edge case tests for cpc-lex

#[cfg(test)]
mod tests {
    use crate::{scan, Literal, Token, TokenType};
    use cpc_util::Handler;

    fn lex_all(source: &str) -> (Vec<Token>, Vec<(u32, String)>) {
        let mut handler = Handler::new();
        let tokens = scan(source, &mut handler);
        let reports = handler
            .diagnostics()
            .into_iter()
            .map(|d| (d.line(), d.message))
            .collect();
        (tokens, reports)
    }

    fn kinds(tokens: &[Token]) -> Vec<TokenType> {
        tokens.iter().map(|t| t.kind()).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        let (tokens, reports) = lex_all("");
        assert!(tokens.is_empty());
        assert!(reports.is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let (tokens, _) = lex_all("x");
        assert_eq!(tokens[0].kind(), TokenType::Identifier);
        assert_eq!(tokens[0].lexeme(), "x");
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let (tokens, _) = lex_all(&format!("var {} = 1;", name));
        assert_eq!(tokens[1].lexeme(), name);
    }

    #[test]
    fn test_edge_long_string() {
        let body = "z".repeat(10000);
        let (tokens, reports) = lex_all(&format!("'{}'", body));
        assert!(reports.is_empty());
        assert_eq!(tokens[0].literal(), Some(&Literal::Str(body)));
    }

    #[test]
    fn test_edge_no_whitespace() {
        let (tokens, reports) = lex_all("var x=1+2*3;");
        assert!(reports.is_empty());
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenType::Var,
                TokenType::Identifier,
                TokenType::Equal,
                TokenType::Int,
                TokenType::Plus,
                TokenType::Int,
                TokenType::Star,
                TokenType::Int,
                TokenType::Semicolon,
            ]
        );
    }

    #[test]
    fn test_edge_number_then_identifier() {
        let (tokens, _) = lex_all("123abc");
        assert_eq!(kinds(&tokens), vec![TokenType::Int, TokenType::Identifier]);
        assert_eq!(tokens[1].lexeme(), "abc");
    }

    #[test]
    fn test_edge_string_adjacent_to_ident() {
        let (tokens, _) = lex_all("a\"b\"c");
        assert_eq!(
            kinds(&tokens),
            vec![TokenType::Identifier, TokenType::String, TokenType::Identifier]
        );
    }

    #[test]
    fn test_edge_slash_star_in_string() {
        let (tokens, reports) = lex_all("'/* not a comment */'");
        assert!(reports.is_empty());
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind(), TokenType::String);
    }

    #[test]
    fn test_edge_hash_in_string() {
        let (tokens, _) = lex_all("\"#1\" 2");
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_edge_double_slash_is_two_slashes() {
        let (tokens, _) = lex_all("// not a comment");
        assert_eq!(tokens[0].kind(), TokenType::Slash);
        assert_eq!(tokens[1].kind(), TokenType::Slash);
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let (tokens, _) = lex_all("a\r\nb\r\nc");
        let lines: Vec<_> = tokens.iter().map(|t| t.line()).collect();
        assert_eq!(lines, vec![1, 2, 3]);
    }

    #[test]
    fn test_edge_unfinished_string_at_eof_after_newlines() {
        let (tokens, reports) = lex_all("\n\n'abc");
        assert!(tokens.is_empty());
        assert_eq!(reports, vec![(3, "Unfinished string".to_string())]);
    }

    #[test]
    fn test_edge_multiple_errors_same_line() {
        let (tokens, reports) = lex_all("@ ~ 1.2.3 'x");
        assert_eq!(
            reports,
            vec![
                (1, "unexpected character '@'".to_string()),
                (1, "unexpected character '~'".to_string()),
                (1, "unexpected leading '.' in float".to_string()),
                (1, "Unfinished string".to_string()),
            ]
        );
        assert_eq!(kinds(&tokens), vec![TokenType::Float]);
    }

    #[test]
    fn test_edge_nul_character() {
        let (tokens, reports) = lex_all("1\u{0}2");
        assert_eq!(tokens.len(), 2);
        assert_eq!(reports, vec![(1, "unexpected character '\u{0}'".to_string())]);
    }

    #[test]
    fn test_edge_nul_inside_string() {
        let (tokens, reports) = lex_all("'a\u{0}b'");
        assert!(reports.is_empty());
        assert_eq!(tokens[0].literal(), Some(&Literal::Str("a\u{0}b".into())));
    }

    #[test]
    fn test_edge_emoji_outside_string() {
        let (tokens, reports) = lex_all("1 🦀 2");
        assert_eq!(tokens.len(), 2);
        assert_eq!(reports.len(), 1);
        assert_eq!(tokens[1].span().start, 7);
    }

    #[test]
    fn test_edge_comment_right_after_token() {
        let (tokens, _) = lex_all("x/*c*/y#z");
        let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme()).collect();
        assert_eq!(lexemes, vec!["x", "y"]);
    }

    #[test]
    fn test_edge_token_line_after_multiline_comment() {
        let (tokens, _) = lex_all("/*\n\n\n*/x");
        assert_eq!(tokens[0].line(), 4);
    }

    #[test]
    fn test_edge_dot_runs() {
        let (tokens, reports) = lex_all("...");
        assert!(reports.is_empty());
        assert_eq!(
            kinds(&tokens),
            vec![TokenType::Dot, TokenType::Dot, TokenType::Dot]
        );
    }

    #[test]
    fn test_edge_zero() {
        let (tokens, _) = lex_all("0 0.0 .0");
        assert_eq!(
            tokens.iter().map(|t| t.literal().cloned()).collect::<Vec<_>>(),
            vec![
                Some(Literal::Int(0)),
                Some(Literal::Float(0.0)),
                Some(Literal::Float(0.0)),
            ]
        );
    }
}
