//! Presentation contract: turns a [`MatchResult`] into the three strings a UI shows and hands
//! them to a [`DisplaySink`].

use crate::resolver::Resolver;
use tagfinder_core::{DisplaySink, MatchResult, Record, Rendered};

pub const NOT_FOUND_TITLE: &str = "Pesquisa não reconhecida";

/// Keywords suggested when nothing matched.
pub const SUGGESTIONS: &[&str] = &[
    "imagem",
    "parágrafo",
    "link",
    "título",
    "lista",
    "tabela",
    "formulário",
];

pub fn render_record(r: &Record) -> Rendered {
    Rendered {
        title: format!("{}: {}", r.title, r.description),
        description: "Exemplo:".to_string(),
        code: r.example.clone(),
    }
}

/// Same screen for every miss, whatever the reason.
pub fn render_not_found() -> Rendered {
    let mut code = String::from("Exemplos válidos:");
    for s in SUGGESTIONS {
        code.push_str("\n- ");
        code.push_str(s);
    }
    Rendered {
        title: NOT_FOUND_TITLE.to_string(),
        description: format!(
            "Digite só a palavra-chave. Exemplos: {}.",
            SUGGESTIONS.join(", ")
        ),
        code,
    }
}

pub fn render(result: &MatchResult) -> Rendered {
    match &result.record {
        Some(r) => render_record(r),
        None => render_not_found(),
    }
}

/// Resolve `query` and show the outcome. Returns the result for callers that log reasons.
pub fn present(resolver: &Resolver, query: &str, sink: &mut dyn DisplaySink) -> MatchResult {
    let result = resolver.resolve(query);
    sink.show(&render(&result));
    result
}
