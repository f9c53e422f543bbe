use ansi_term::Colour::{Blue, Green, Red};
use tracing_subscriber::{fmt, EnvFilter};

use foterm::{Language, Term, TermStore};
use foterm::built_in::{boolean, integer};

/// Use `RUST_LOG` to override the default filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,foterm=debug"));
    fmt().with_env_filter(filter).with_target(false).init();
}

/// `x + x`, `n` times.
fn doubled(x: Term, n: usize) -> Term {
    (0..n).fold(x, |y, _| integer::plus(y.clone(), y))
}

fn main() {
    init_logging();
    let language = Language::standard();

    let y = doubled(integer::lit(1), 10);
    let mut store = TermStore::new();
    let id = store.store(&y);
    println!("{}", Blue.paint(doubled(Term::var("x"), 3).to_string()));
    println!("size        = {}", Green.paint(store.size(id).to_string()));
    println!("stored size = {}", Green.paint(store.stored_size(id).to_string()));
    println!("value       = {}", Green.paint(language.eval_stored(&|_| None, &store, id).to_string()));

    let mixed = boolean::equals(integer::lit(1), boolean::lit(true));
    match language.check(&|_| None, &mixed) {
        Some(sort) => println!("{} : {}", mixed, sort),
        None => println!("{} {}", Blue.paint(mixed.to_string()), Red.paint("is ill-typed")),
    }
}
