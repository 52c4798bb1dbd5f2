use anyhow::Result;

fn main() -> Result<()> {
    chat_export_parser::cli::run()
}
