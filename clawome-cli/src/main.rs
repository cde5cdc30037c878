//! Demo harness: builds a few synthetic pages with the `clawome-dom`
//! builder API and prints what `clawome_cli::extract` renders for each,
//! the way `demo/src/basics.rs` exercises AccessKit's tree builder
//! without a real GUI toolkit behind it.

mod config_file;

use clawome_core::{Config, RenderMode};
use clawome_dom::Document;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config_path = args
        .iter()
        .position(|a| a == "--config")
        .and_then(|i| args.get(i + 1));

    let config = match config_path {
        Some(path) => match config_file::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("failed to load {path}: {err}, falling back to defaults");
                Config::default()
            }
        },
        None => Config::default(),
    };

    run_demo("search form", &config, build_search_form());
    run_demo("tab group", &config, build_tab_group());
    run_demo("data table", &config, build_table());
}

fn run_demo(name: &str, config: &Config, mut doc: Document) {
    println!("=== {name} ===");
    match clawome_cli::extract(&mut doc, config, RenderMode::Full) {
        Ok(outcome) => {
            println!("{}", outcome.rendered);
            println!(
                "-- {} nodes, {} chars, ratio {:.3}, truncated={}",
                outcome.stats.nodes_after_compression,
                outcome.stats.rendered_chars,
                outcome.stats.compression_ratio(),
                outcome.stats.truncated,
            );
        }
        Err(err) => eprintln!("extraction failed for {name}: {err}"),
    }
    println!();
}

fn build_search_form() -> Document {
    let mut doc = Document::new();
    let body = doc.body();

    let form = doc.create_element("form", body);
    doc.set_attr(form, "action", "/search");
    doc.set_attr(form, "method", "get");

    let input = doc.create_element("input", form);
    doc.set_attr(input, "type", "search");
    doc.set_attr(input, "name", "q");
    doc.set_attr(input, "placeholder", "Search the web");

    let button = doc.create_element("button", form);
    doc.set_attr(button, "type", "submit");
    doc.create_text("Search", button);

    doc
}

fn build_tab_group() -> Document {
    let mut doc = Document::new();
    let body = doc.body();

    let tabs = doc.create_element("div", body);
    doc.add_class(tabs, "tabs");

    let overview = doc.create_element("div", tabs);
    doc.add_class(overview, "tab-panel");
    doc.create_text("Overview content goes here.", overview);

    let details = doc.create_element("div", tabs);
    doc.add_class(details, "tab-panel");
    doc.create_text("Details content goes here.", details);
    doc.hide(details);

    doc
}

fn build_table() -> Document {
    let mut doc = Document::new();
    let body = doc.body();

    let table = doc.create_element("table", body);
    let header_row = doc.create_element("tr", table);
    for label in ["Name", "Role"] {
        let th = doc.create_element("th", header_row);
        doc.create_text(label, th);
    }

    for (name, role) in [("Ada", "Engineer"), ("Grace", "Admiral")] {
        let row = doc.create_element("tr", table);
        let name_cell = doc.create_element("td", row);
        doc.create_text(name, name_cell);
        let role_cell = doc.create_element("td", row);
        doc.create_text(role, role_cell);
    }

    doc
}
