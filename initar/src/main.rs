use anyhow::Context;
use clap::{crate_description, crate_name, crate_version, App, AppSettings, Arg, SubCommand};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = App::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("create")
                .about("Generate an initrd image")
                .arg(
                    Arg::with_name("output")
                        .help("Output initrd file")
                        .short("o")
                        .long("output")
                        .required(true)
                        .takes_value(true)
                        .value_name("FILE"),
                )
                .arg(
                    Arg::with_name("assets-dir")
                        .help("Assets directory (defaults to 'assets')")
                        .long("assets-dir")
                        .takes_value(true)
                        .value_name("DIR")
                        .default_value("assets"),
                ),
        )
        .subcommand(
            SubCommand::with_name("pad")
                .about("Pad or truncate a file to an exact byte length")
                .arg(
                    Arg::with_name("file")
                        .help("File to resize")
                        .required(true)
                        .value_name("FILE"),
                )
                .arg(
                    Arg::with_name("target_size")
                        .help("Target size in bytes")
                        .required(true)
                        .value_name("SIZE"),
                ),
        )
        .get_matches();

    if let Some(matches) = matches.subcommand_matches("create") {
        initar::create(
            matches.value_of("output").unwrap(),
            matches.value_of("assets-dir").unwrap(),
        )?;
    } else if let Some(matches) = matches.subcommand_matches("pad") {
        let size_arg = matches.value_of("target_size").unwrap();
        let target_size = size_arg
            .parse::<u64>()
            .with_context(|| format!("Invalid target size: {}", size_arg))?;
        initar::pad_to(matches.value_of("file").unwrap(), target_size)?;
    }

    Ok(())
}
