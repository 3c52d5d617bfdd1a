//! Edge case tests for tinyc-lex

#[cfg(test)]
mod tests {
    use crate::{ScanOptions, Scanner, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        let mut scanner = Scanner::from_source(source);
        let mut tokens = Vec::new();
        loop {
            let token = scanner.next_token().unwrap();
            if token.kind == TokenKind::EndFile { break; }
            tokens.push(token);
        }
        tokens
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).into_iter().map(|t| t.kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_no_trailing_newline() {
        let t = lex_all("write x");
        assert_eq!(t[1].lexeme, "x");
    }

    #[test]
    fn test_edge_eof_inside_assign() {
        let mut scanner = Scanner::from_source("x :");
        scanner.next_token().unwrap();
        assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Error);
        assert!(scanner.next_token().unwrap().is_eof());
    }

    #[test]
    fn test_edge_eof_after_every_state() {
        for source in ["", " ", "{", "{ x", ":", "12", "abc", "+"] {
            let mut scanner = Scanner::from_source(source);
            let mut calls = 0;
            while !scanner.next_token().unwrap().is_eof() {
                calls += 1;
                assert!(calls < 10, "{source:?} never reached end of file");
            }
            assert!(scanner.next_token().unwrap().is_eof());
        }
    }

    #[test]
    fn test_edge_adjacent_tokens_without_spaces() {
        assert_eq!(
            kinds("if(x<1)then"),
            vec![
                TokenKind::If,
                TokenKind::LParen,
                TokenKind::Id,
                TokenKind::Lt,
                TokenKind::Num,
                TokenKind::RParen,
                TokenKind::Then,
            ]
        );
    }

    #[test]
    fn test_edge_double_colon() {
        assert_eq!(kinds("::="), vec![TokenKind::Error, TokenKind::Assign]);
    }

    #[test]
    fn test_edge_assign_then_equals() {
        assert_eq!(kinds(":=="), vec![TokenKind::Assign, TokenKind::Eq]);
    }

    #[test]
    fn test_edge_comment_between_number_digits() {
        let t = lex_all("12{ gap }34");
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].lexeme, "12");
        assert_eq!(t[1].lexeme, "34");
    }

    #[test]
    fn test_edge_non_ascii_bytes_are_errors() {
        let t = lex_all("x é y");
        assert_eq!(t[0].kind, TokenKind::Id);
        assert_eq!(t[1].kind, TokenKind::Error);
        assert_eq!(t[2].kind, TokenKind::Error);
        assert_eq!(t[3].kind, TokenKind::Id);
    }

    #[test]
    fn test_edge_tokens_across_tiny_line_capacity() {
        let options = ScanOptions::default().with_line_capacity(1);
        let tokens: Vec<_> = Scanner::with_options("ab:=12;\nx".as_bytes(), options)
            .map(|t| t.unwrap())
            .collect();
        let summary: Vec<_> = tokens.iter().map(|t| (t.kind, t.lexeme.as_str(), t.line)).collect();
        assert_eq!(
            summary,
            vec![
                (TokenKind::Id, "ab", 1),
                (TokenKind::Assign, ":=", 1),
                (TokenKind::Num, "12", 1),
                (TokenKind::Semi, ";", 1),
                (TokenKind::Id, "x", 2),
            ]
        );
    }

    // ==================== PROPERTIES ====================

    #[test]
    fn test_property_letter_runs() {
        use proptest::prelude::*;

        proptest!(|(word in "[a-zA-Z]{1,30}")| {
            let t = lex_all(&word);
            assert_eq!(t.len(), 1);
            assert_eq!(t[0].lexeme, word);
            assert_eq!(t[0].kind, crate::classify(&word));
        });
    }

    #[test]
    fn test_property_colon_pushback() {
        use proptest::prelude::*;

        proptest!(|(next in "[a-z0-9;+(]")| {
            let t = lex_all(&format!(":{}", next));
            assert_eq!(t[0].kind, TokenKind::Error);
            assert_eq!(t[0].lexeme, ":");
            assert_eq!(t.len(), 2);
            assert_eq!(t[1].lexeme, next);
        });
    }

    #[test]
    fn test_property_comments_vanish() {
        use proptest::prelude::*;

        proptest!(|(body in "[^}]{0,80}")| {
            let source = format!("a{{{}}}b", body);
            let t = lex_all(&source);
            assert_eq!(t.len(), 2);
            assert_eq!(t[0].lexeme, "a");
            assert_eq!(t[1].lexeme, "b");
        });
    }

    #[test]
    fn test_property_whitespace_ignored() {
        use proptest::prelude::*;

        proptest!(|(spaces in "[ \t\n]{0,40}")| {
            let source = format!("{}repeat{}", spaces, spaces);
            let t = lex_all(&source);
            assert_eq!(t.len(), 1);
            assert_eq!(t[0].kind, TokenKind::Repeat);
        });
    }

    #[test]
    fn test_property_scanning_always_terminates() {
        use proptest::prelude::*;

        proptest!(|(source in "[ -~\n\t]{0,120}")| {
            let mut scanner = Scanner::from_source(&source);
            let mut count = 0;
            while !scanner.next_token().unwrap().is_eof() {
                count += 1;
                assert!(count <= source.len());
            }
        });
    }
}
