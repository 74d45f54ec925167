fn main() -> anyhow::Result<()> {
    extension_icons_cli::run()
}
