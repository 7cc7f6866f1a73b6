use clap::Parser;

fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = ferret::Args::parse();
	ferret::run(args)
}
