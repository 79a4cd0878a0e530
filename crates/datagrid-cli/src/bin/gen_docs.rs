//! Print the datagrid command-line options as a markdown table.
//!
//! Run with `cargo run -p datagrid-cli --bin gen_docs > options.md`.

fn main() {
    print!("{}", datagrid_cli::render_options_markdown());
}
