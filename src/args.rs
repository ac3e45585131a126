use clap::Parser;

/// Options of the binary itself. Everything after them is handed to the
/// option table untouched.
#[derive(Parser, Debug)]
#[command(
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    #[arg(long, default_value_t = log::LevelFilter::Info)]
    pub log_level: log::LevelFilter,

    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub options: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_dash_tokens_reach_the_option_table() {
        let args = Args::try_parse_from(["opcode-config", "-V"]).unwrap();
        assert_eq!(args.options, ["-V"]);

        let args =
            Args::try_parse_from(["opcode-config", "-help", "-of", "out.txt", "--version"]).unwrap();
        assert_eq!(args.options, ["-help", "-of", "out.txt", "--version"]);
        assert_eq!(args.log_level, log::LevelFilter::Info);
    }

    #[test]
    fn log_level_precedes_forwarded_tokens() {
        let args =
            Args::try_parse_from(["opcode-config", "--log-level", "debug", "-d", "diff.db"]).unwrap();
        assert_eq!(args.log_level, log::LevelFilter::Debug);
        assert_eq!(args.options, ["-d", "diff.db"]);
    }
}
