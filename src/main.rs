use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();
    let args = gl_journal_import::args::parse();
    gl_journal_import::cli::main(args)
}
