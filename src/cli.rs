use clap::Parser;
use hex_color::HexColor;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Tick rate of the stopwatch in hertz.
    ///
    /// Each tick advances the hundredths by one.
    #[arg(short = 'H', long, default_value_t = 1000)]
    pub hz: u32,

    /// Color of lit pixels, as a hex color.
    #[arg(long, default_value = "#FFFFFF", value_parser = parse_color)]
    pub foreground: HexColor,

    /// Color of dark pixels, as a hex color.
    #[arg(long, default_value = "#000000", value_parser = parse_color)]
    pub background: HexColor,

    /// Initial window size as a multiple of the display resolution.
    #[arg(short, long, default_value_t = 10)]
    pub scale: u32,
}

fn parse_color(s: &str) -> Result<HexColor, String> {
    HexColor::parse(s).map_err(|e| format!("invalid color `{}`: {}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["stopwatch"]);

        assert_eq!(args.hz, 1000);
        assert_eq!(args.foreground, HexColor::WHITE);
        assert_eq!(args.background, HexColor::BLACK);
        assert_eq!(args.scale, 10);
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "stopwatch",
            "-H",
            "100",
            "--foreground",
            "#FF0000",
            "--scale",
            "4",
        ]);

        assert_eq!(args.hz, 100);
        assert_eq!(args.foreground, HexColor::rgb(255, 0, 0));
        assert_eq!(args.scale, 4);
    }

    #[test]
    fn test_invalid_color() {
        assert!(Args::try_parse_from(["stopwatch", "--background", "nope"]).is_err());
    }
}
