use std::{collections::BTreeMap, fmt, io, sync::Arc};

#[derive(Debug, Clone)]
pub struct PmdError {
    pub key: &'static str,
    pub args: BTreeMap<&'static str, String>,
    pub causes: Vec<PmdCause>,
}

#[derive(Debug, Clone)]
pub enum PmdCause {
    Pmd(Box<PmdError>),
    Std(Arc<dyn std::error::Error + Send + Sync>),
}

impl PmdError {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            args: BTreeMap::new(),
            causes: Vec::new(),
        }
    }

    pub fn with_arg(mut self, k: &'static str, v: impl ToString) -> Self {
        self.args.insert(k, v.to_string());
        self
    }

    #[allow(dead_code)]
    pub fn push_pmd(mut self, cause: PmdError) -> Self {
        self.causes.push(PmdCause::Pmd(Box::new(cause)));
        self
    }

    pub fn push_std(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.causes.push(PmdCause::Std(Arc::new(cause)));
        self
    }
}

impl fmt::Display for PmdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.key)?;
        let mut first = true;
        for (k, v) in &self.args {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{k}={v}")?;
        }
        write!(f, ")")
    }
}

impl std::error::Error for PmdError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.causes.iter().find_map(|c| match c {
            PmdCause::Pmd(e) => Some(e.as_ref() as &dyn std::error::Error),
            PmdCause::Std(e) => Some(e.as_ref()),
        })
    }
}

impl From<String> for PmdError {
    fn from(s: String) -> Self {
        PmdError::new("string-error").with_arg("msg", s)
    }
}

impl From<&str> for PmdError {
    fn from(s: &str) -> Self {
        PmdError::new("str-error").with_arg("msg", s)
    }
}

impl From<io::Error> for PmdError {
    fn from(err: io::Error) -> Self {
        PmdError::new("io-error").push_std(err)
    }
}
