use clap::Parser;

fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = asc::Args::parse();

	asc::run(args)
}
