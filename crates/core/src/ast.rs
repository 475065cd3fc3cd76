//! Owned expression tree for rule call arguments

/// An argument-value expression as it appears in a build file
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// String literal, already unquoted
    Str(String),
    /// Numeric literal, kept as source text
    Number(String),
    Bool(bool),
    None,
    /// Bare identifier
    Name(String),
    List(Vec<Expr>),
    Dict(Vec<(Expr, Expr)>),
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Call(Call),
    /// Any construct the front end does not model, tagged with its kind
    Other(String),
}

/// Binary operators
#[derive(Debug, Clone, PartialEq)]
pub enum BinOp {
    Add,
    Other(String),
}

/// A call expression: `function(args..., name = value, ...)`
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub function: Box<Expr>,
    pub args: Vec<Expr>,
    pub keywords: Vec<Keyword>,
}

/// A keyword argument in a call
#[derive(Debug, Clone, PartialEq)]
pub struct Keyword {
    pub name: String,
    pub value: Expr,
}

impl Expr {
    pub fn str(value: impl Into<String>) -> Self {
        Expr::Str(value.into())
    }

    pub fn list<I, E>(items: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        Expr::List(items.into_iter().map(Into::into).collect())
    }

    pub fn add(left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Expr::BinaryOp {
            op: BinOp::Add,
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }

    /// Human-readable name of the construct, used in error messages
    pub fn describe(&self) -> String {
        match self {
            Expr::Str(_) => "string literal".to_string(),
            Expr::Number(text) => format!("numeric literal `{text}`"),
            Expr::Bool(value) => format!("boolean literal `{}`", if *value { "True" } else { "False" }),
            Expr::None => "`None`".to_string(),
            Expr::Name(name) => format!("identifier `{name}`"),
            Expr::List(_) => "list literal".to_string(),
            Expr::Dict(_) => "dict literal".to_string(),
            Expr::BinaryOp { op: BinOp::Add, .. } => "`+` expression".to_string(),
            Expr::BinaryOp { op: BinOp::Other(symbol), .. } => format!("`{symbol}` expression"),
            Expr::Call(call) => match call.function_name() {
                Some(name) => format!("call to `{name}`"),
                None => "call expression".to_string(),
            },
            Expr::Other(kind) => kind.replace('_', " "),
        }
    }

    /// Whether this is a literal of a kind other than string
    pub fn is_non_string_literal(&self) -> bool {
        matches!(self, Expr::Number(_) | Expr::Bool(_) | Expr::None)
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Expr::Str(value.to_string())
    }
}

impl From<Call> for Expr {
    fn from(call: Call) -> Self {
        Expr::Call(call)
    }
}

impl Call {
    pub fn new(function: &str) -> Self {
        Self {
            function: Box::new(Expr::Name(function.to_string())),
            args: Vec::new(),
            keywords: Vec::new(),
        }
    }

    pub fn arg(mut self, value: impl Into<Expr>) -> Self {
        self.args.push(value.into());
        self
    }

    pub fn kw(mut self, name: &str, value: impl Into<Expr>) -> Self {
        self.keywords.push(Keyword {
            name: name.to_string(),
            value: value.into(),
        });
        self
    }

    /// The identifier being called, when the callee is a plain name
    pub fn function_name(&self) -> Option<&str> {
        match self.function.as_ref() {
            Expr::Name(name) => Some(name),
            _ => None,
        }
    }

    /// First keyword argument with the given name
    pub fn keyword(&self, name: &str) -> Option<&Expr> {
        self.keywords
            .iter()
            .find(|keyword| keyword.name == name)
            .map(|keyword| &keyword.value)
    }
}
