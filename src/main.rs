fn main() -> anyhow::Result<()> {
    annotqc::cli::run()
}
