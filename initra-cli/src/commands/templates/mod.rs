pub mod backend;
pub mod component;
pub mod page;
pub mod route;
pub mod service;

use chrono::Datelike;

/// Simple template rendering: replaces {{key}} with value.
///
/// Keys absent from `vars` are left in place untouched.
pub fn render<K, V>(template: &str, vars: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut output = template.to_string();
    for (key, value) in vars {
        output = output.replace(&format!("{{{{{}}}}}", key.as_ref()), value.as_ref());
    }
    output
}

/// Source language of generated files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    TypeScript,
    JavaScript,
}

impl Language {
    pub fn is_typescript(self) -> bool {
        self == Language::TypeScript
    }

    /// `ts` / `js`
    pub fn script_ext(self) -> &'static str {
        match self {
            Language::TypeScript => "ts",
            Language::JavaScript => "js",
        }
    }

    /// `tsx` / `jsx`
    pub fn markup_ext(self) -> &'static str {
        match self {
            Language::TypeScript => "tsx",
            Language::JavaScript => "jsx",
        }
    }
}

/// Year stamped into copyright footers.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
