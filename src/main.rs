fn main() -> anyhow::Result<()> {
    pathtools_lib::run()
}
