fn main() -> anyhow::Result<()> {
    charge_field::app::run()
}
