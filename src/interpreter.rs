/// The interpret operation common to all nodes in the syntax tree.
pub trait Expression {
    fn interpret(&self) -> i64;
}

/// A leaf node. Evaluates to its fixed value.
pub struct Terminal {
    value: i64,
}

impl Terminal {
    pub fn new(value: i64) -> Self {
        Self { value }
    }
}

impl Expression for Terminal {
    fn interpret(&self) -> i64 {
        self.value
    }
}

/// An internal node. Evaluates to its child's value plus a fixed increment.
pub struct Nonterminal {
    expression: Box<dyn Expression>,
    increment: i64,
}

impl Nonterminal {
    pub fn new(expression: Box<dyn Expression>, increment: i64) -> Self {
        Self { expression, increment }
    }
}

impl Expression for Nonterminal {
    fn interpret(&self) -> i64 {
        self.expression.interpret() + self.increment
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::{Expression, Nonterminal, Terminal};

    #[test]
    fn terminal() {
        assert_eq!(Terminal::new(0b101).interpret(), 5);
    }

    #[test]
    fn single_wrap() {
        let tree = Nonterminal::new(Box::new(Terminal::new(0b101)), 0b1);
        assert_eq!(tree.interpret(), 6);
    }

    #[test]
    fn nested_wraps() {
        let tree = Nonterminal::new(
            Box::new(Nonterminal::new(Box::new(Terminal::new(5)), 1)),
            10,
        );
        assert_eq!(tree.interpret(), 16);
    }
}
