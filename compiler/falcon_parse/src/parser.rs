//! The recursive-descent parser.

use std::mem;

use falcon_ir::{Node, NodeId, NodeKind, Span, Token, TokenKind};
use falcon_lexer::Lexer;
use falcon_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::snapshot::ParserSnapshot;
use crate::ParseError;

/// One operand parser per precedence tier.
type Operand<'src> = fn(&mut Parser<'src>) -> Result<Node, ParseError>;

/// Parser state: the lexer, one token of lookahead and the node id counter.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    ahead: Token,
    next_id: u32,
}

impl<'src> Parser<'src> {
    /// Create a parser and load the first lookahead token.
    pub fn new(source: &'src str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let ahead = lexer.next_token()?;
        Ok(Parser {
            lexer,
            ahead,
            next_id: 0,
        })
    }

    /// `program := statement* EndOfInput`
    pub fn parse_program(&mut self) -> Result<Node, ParseError> {
        let id = self.next_id();
        let mut statements = Vec::new();
        while !self.check(TokenKind::EndOfInput) {
            statements.push(self.statement()?);
        }
        debug!(statements = statements.len(), "parsed program");
        let span = Span::from_range(0..self.lexer.source().len());
        Ok(Node::with_children(
            id,
            NodeKind::Program,
            "",
            span,
            statements,
        ))
    }

    // ─── Token plumbing ────────────────────────────────────────────────

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.ahead.kind == kind
    }

    /// Consume the lookahead token and load the next one.
    fn advance(&mut self) -> Result<Token, ParseError> {
        let next = self.lexer.next_token()?;
        Ok(mem::replace(&mut self.ahead, next))
    }

    /// Consume the lookahead token if it is `kind`, else fail.
    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(self.unexpected(kind))
        }
    }

    #[cold]
    fn unexpected(&self, expected: TokenKind) -> ParseError {
        ParseError::UnexpectedToken {
            expected,
            found: self.ahead.kind,
            span: self.ahead.span,
        }
    }

    fn next_id(&mut self) -> NodeId {
        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn leaf(&mut self, kind: NodeKind, token: Token) -> Node {
        let id = self.next_id();
        Node::new(id, kind, token.text, token.span)
    }

    fn empty_at(&mut self, offset: u32) -> Node {
        let id = self.next_id();
        Node::new(id, NodeKind::Empty, "", Span::point(offset))
    }

    // ─── Backtracking ──────────────────────────────────────────────────

    pub(crate) fn snapshot(&self) -> ParserSnapshot {
        ParserSnapshot::new(self.ahead.clone(), self.lexer.position())
    }

    pub(crate) fn restore(&mut self, snapshot: ParserSnapshot) {
        self.ahead = snapshot.ahead;
        self.lexer.set_position(snapshot.lexer_pos);
    }

    /// Speculatively match `Identifier assignOp`.
    ///
    /// Consumes the identifier on success. A lexical error reads as "no
    /// match"; the fallback parse hits the same error and reports it.
    fn eat_assignment_prefix(&mut self) -> bool {
        self.check(TokenKind::Identifier)
            && self.advance().is_ok()
            && self.ahead.kind.is_assignment_operator()
    }

    // ─── Statements ────────────────────────────────────────────────────

    fn statement(&mut self) -> Result<Node, ParseError> {
        ensure_sufficient_stack(|| match self.ahead.kind {
            TokenKind::LBrace => self.block(),
            TokenKind::If => self.if_statement(),
            TokenKind::For => self.for_statement(),
            TokenKind::While => self.while_statement(),
            TokenKind::Do => self.do_while_statement(),
            TokenKind::Break => self.jump(NodeKind::Break),
            TokenKind::Continue => self.jump(NodeKind::Continue),
            _ => {
                let node = self.decl_or_expr()?;
                self.expect(TokenKind::Semicolon)?;
                Ok(node)
            }
        })
    }

    /// `block := "{" statement* "}"`
    fn block(&mut self) -> Result<Node, ParseError> {
        let open = self.expect(TokenKind::LBrace)?;
        let id = self.next_id();
        let mut statements = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.check(TokenKind::EndOfInput) {
            statements.push(self.statement()?);
        }
        let close = self.expect(TokenKind::RBrace)?;
        Ok(Node::with_children(
            id,
            NodeKind::Block,
            "",
            open.span.merge(close.span),
            statements,
        ))
    }

    /// `"(" assignOrExpr ")"` as used by `if`, `while` and `do`.
    fn condition(&mut self) -> Result<Node, ParseError> {
        self.expect(TokenKind::LParen)?;
        let cond = self.assign_or_expr()?;
        self.expect(TokenKind::RParen)?;
        Ok(cond)
    }

    /// `ifStmt := "if" "(" assignOrExpr ")" statement ( "else" statement )?`
    fn if_statement(&mut self) -> Result<Node, ParseError> {
        let keyword = self.expect(TokenKind::If)?;
        let id = self.next_id();
        let cond = self.condition()?;
        let then_branch = self.statement()?;
        let mut span = keyword.span.merge(then_branch.span());
        let mut children = vec![cond, then_branch];
        if self.check(TokenKind::Else) {
            self.advance()?;
            let else_branch = self.statement()?;
            span = span.merge(else_branch.span());
            children.push(else_branch);
        }
        Ok(Node::with_children(id, NodeKind::If, "", span, children))
    }

    /// `forStmt := "for" "(" forInit? ";" assignOrExpr? ";" assignOrExpr? ")" statement`
    fn for_statement(&mut self) -> Result<Node, ParseError> {
        let keyword = self.expect(TokenKind::For)?;
        let id = self.next_id();
        self.expect(TokenKind::LParen)?;

        let init = if self.check(TokenKind::Semicolon) {
            self.empty_at(self.ahead.span.start)
        } else {
            self.decl_or_expr()?
        };
        self.expect(TokenKind::Semicolon)?;

        let cond = if self.check(TokenKind::Semicolon) {
            self.empty_at(self.ahead.span.start)
        } else {
            self.assign_or_expr()?
        };
        self.expect(TokenKind::Semicolon)?;

        let update = if self.check(TokenKind::RParen) {
            self.empty_at(self.ahead.span.start)
        } else {
            self.assign_or_expr()?
        };
        self.expect(TokenKind::RParen)?;

        let body = self.statement()?;
        let span = keyword.span.merge(body.span());
        Ok(Node::with_children(
            id,
            NodeKind::For,
            "",
            span,
            vec![init, cond, update, body],
        ))
    }

    /// `whileStmt := "while" "(" assignOrExpr ")" statement`
    fn while_statement(&mut self) -> Result<Node, ParseError> {
        let keyword = self.expect(TokenKind::While)?;
        let id = self.next_id();
        let cond = self.condition()?;
        let body = self.statement()?;
        let span = keyword.span.merge(body.span());
        Ok(Node::with_children(
            id,
            NodeKind::While,
            "",
            span,
            vec![cond, body],
        ))
    }

    /// `doWhileStmt := "do" statement "while" "(" assignOrExpr ")" ";"`
    fn do_while_statement(&mut self) -> Result<Node, ParseError> {
        let keyword = self.expect(TokenKind::Do)?;
        let id = self.next_id();
        let body = self.statement()?;
        self.expect(TokenKind::While)?;
        let cond = self.condition()?;
        let semi = self.expect(TokenKind::Semicolon)?;
        Ok(Node::with_children(
            id,
            NodeKind::DoWhile,
            "",
            keyword.span.merge(semi.span),
            vec![body, cond],
        ))
    }

    /// `break ";"` or `continue ";"`
    fn jump(&mut self, kind: NodeKind) -> Result<Node, ParseError> {
        let keyword = self.advance()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(self.leaf(kind, keyword))
    }

    /// `declOrExprStmt := intDeclare | assignOrExpr`
    fn decl_or_expr(&mut self) -> Result<Node, ParseError> {
        if self.check(TokenKind::IntKeyword) {
            self.int_declare()
        } else {
            self.assign_or_expr()
        }
    }

    /// `intDeclare := "int" declarator ( "," declarator )*`
    ///
    /// A single declarator is returned as is; several are wrapped in a
    /// `DeclarationList`.
    fn int_declare(&mut self) -> Result<Node, ParseError> {
        let keyword = self.expect(TokenKind::IntKeyword)?;
        let first = self.declarator(Some(keyword.span))?;
        if !self.check(TokenKind::Comma) {
            return Ok(first);
        }

        let id = self.next_id();
        let mut declarators = vec![first];
        while self.check(TokenKind::Comma) {
            self.advance()?;
            declarators.push(self.declarator(None)?);
        }
        let span = declarators
            .iter()
            .fold(keyword.span, |span, decl| span.merge(decl.span()));
        Ok(Node::with_children(
            id,
            NodeKind::DeclarationList,
            "",
            span,
            declarators,
        ))
    }

    /// `declarator := Identifier ( "=" assignOrExpr )?`
    ///
    /// The first declarator's span starts at the `int` keyword.
    fn declarator(&mut self, keyword: Option<Span>) -> Result<Node, ParseError> {
        let name = self.expect(TokenKind::Identifier)?;
        let id = self.next_id();
        let mut span = keyword.map_or(name.span, |keyword| keyword.merge(name.span));
        let mut children = Vec::new();
        if self.check(TokenKind::Assignment) {
            self.advance()?;
            let init = self.assign_or_expr()?;
            span = span.merge(init.span());
            children.push(init);
        }
        Ok(Node::with_children(
            id,
            NodeKind::IntDeclaration,
            name.text,
            span,
            children,
        ))
    }

    // ─── Expressions ───────────────────────────────────────────────────

    /// `assignOrExpr := Identifier assignOp assignOrExpr | conditional`
    ///
    /// `assignOp` is `=` or one of `+= -= *= /= %=`; the node text keeps
    /// which one.
    pub(crate) fn assign_or_expr(&mut self) -> Result<Node, ParseError> {
        ensure_sufficient_stack(|| {
            let snapshot = self.snapshot();
            if self.eat_assignment_prefix() {
                let op = self.advance()?;
                let id = self.next_id();
                let target = self.leaf(NodeKind::Identifier, snapshot.ahead);
                let value = self.assign_or_expr()?;
                let span = target.span().merge(value.span());
                return Ok(Node::with_children(
                    id,
                    NodeKind::Assignment,
                    op.text,
                    span,
                    vec![target, value],
                ));
            }

            trace!(offset = snapshot.ahead.span.start, "not an assignment, backtracking");
            self.restore(snapshot);
            self.conditional()
        })
    }

    /// `conditional := orExp ( "?" assignOrExpr ":" conditional )?`
    fn conditional(&mut self) -> Result<Node, ParseError> {
        let condition = self.or_exp()?;
        if !self.check(TokenKind::Question) {
            return Ok(condition);
        }
        let question = self.advance()?;
        let id = self.next_id();
        let then_branch = self.assign_or_expr()?;
        self.expect(TokenKind::Colon)?;
        let else_branch = ensure_sufficient_stack(|| self.conditional())?;
        let span = condition.span().merge(else_branch.span());
        Ok(Node::with_children(
            id,
            NodeKind::Conditional,
            question.text,
            span,
            vec![condition, then_branch, else_branch],
        ))
    }

    /// Left-leaning chain for one binary tier.
    fn binary_tier(
        &mut self,
        kind: NodeKind,
        operators: &[TokenKind],
        operand: Operand<'src>,
    ) -> Result<Node, ParseError> {
        let mut left = operand(self)?;
        while operators.contains(&self.ahead.kind) {
            let op = self.advance()?;
            let right = operand(self)?;
            let span = left.span().merge(right.span());
            let id = self.next_id();
            left = Node::with_children(id, kind, op.text, span, vec![left, right]);
        }
        Ok(left)
    }

    fn or_exp(&mut self) -> Result<Node, ParseError> {
        self.binary_tier(NodeKind::Logical, &[TokenKind::Or], Self::and_exp)
    }

    fn and_exp(&mut self) -> Result<Node, ParseError> {
        self.binary_tier(NodeKind::Logical, &[TokenKind::And], Self::equal_exp)
    }

    fn equal_exp(&mut self) -> Result<Node, ParseError> {
        self.binary_tier(
            NodeKind::Relational,
            &[TokenKind::Equal, TokenKind::NotEqual],
            Self::rel_exp,
        )
    }

    fn rel_exp(&mut self) -> Result<Node, ParseError> {
        self.binary_tier(
            NodeKind::Relational,
            &[TokenKind::GT, TokenKind::LT, TokenKind::GE, TokenKind::LE],
            Self::add_exp,
        )
    }

    fn add_exp(&mut self) -> Result<Node, ParseError> {
        self.binary_tier(
            NodeKind::Additive,
            &[TokenKind::Plus, TokenKind::Minus],
            Self::mul_exp,
        )
    }

    fn mul_exp(&mut self) -> Result<Node, ParseError> {
        self.binary_tier(
            NodeKind::Multiplicative,
            &[TokenKind::Star, TokenKind::Slash, TokenKind::Percent],
            Self::unary_exp,
        )
    }

    /// `unaryExp := ( "-" | "++" | "--" ) unaryExp | postfixExp`
    fn unary_exp(&mut self) -> Result<Node, ParseError> {
        let kind = match self.ahead.kind {
            TokenKind::Minus => NodeKind::Unary,
            TokenKind::Increment | TokenKind::Decrement => NodeKind::PrefixUpdate,
            _ => return self.postfix_exp(),
        };
        let op = self.advance()?;
        let id = self.next_id();
        let operand = ensure_sufficient_stack(|| self.unary_exp())?;
        let span = op.span.merge(operand.span());
        Ok(Node::with_children(id, kind, op.text, span, vec![operand]))
    }

    /// `postfixExp := priExp ( "++" | "--" )*`
    fn postfix_exp(&mut self) -> Result<Node, ParseError> {
        let mut operand = self.pri_exp()?;
        while matches!(self.ahead.kind, TokenKind::Increment | TokenKind::Decrement) {
            let op = self.advance()?;
            let id = self.next_id();
            let span = operand.span().merge(op.span);
            operand = Node::with_children(
                id,
                NodeKind::PostfixUpdate,
                op.text,
                span,
                vec![operand],
            );
        }
        Ok(operand)
    }

    /// `priExp := Identifier | IntLiteral | "(" assignOrExpr ")"`
    fn pri_exp(&mut self) -> Result<Node, ParseError> {
        match self.ahead.kind {
            TokenKind::Identifier => {
                let token = self.advance()?;
                Ok(self.leaf(NodeKind::Identifier, token))
            }
            TokenKind::IntLiteral => {
                let token = self.advance()?;
                Ok(self.leaf(NodeKind::IntLiteral, token))
            }
            TokenKind::LParen => {
                self.advance()?;
                let inner = self.assign_or_expr()?;
                self.expect(TokenKind::RParen)?;
                Ok(inner)
            }
            found => Err(ParseError::ExpectedExpression {
                found,
                span: self.ahead.span,
            }),
        }
    }
}
