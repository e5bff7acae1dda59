use clap::{Parser, ValueEnum};
use image::imageops::FilterType;
use progmem_convert::c_array::is_c_identifier;
use progmem_convert::display_constants::{BITMAP_NAME, PIXEL_HEIGHT, PIXEL_WIDTH};
use progmem_convert::prompt::{default_prompt, PathPrompt};
use progmem_convert::{convert, ConvertOptions};
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing::level_filters::LevelFilter;

/// Convert a PNG into a 1-bit PROGMEM array. Fully transparent pixels become set bits.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Args {
    /// PNG to convert. Prompts for one when omitted.
    file: Option<PathBuf>,
    #[clap(long, default_value_t = PIXEL_WIDTH)]
    width: u32,
    #[clap(long, default_value_t = PIXEL_HEIGHT)]
    height: u32,
    /// Identifier of the emitted array
    #[clap(long, default_value = BITMAP_NAME, value_parser = parse_identifier)]
    name: String,
    #[clap(long, value_enum, default_value_t = ResizeFilter::CatmullRom)]
    filter: ResizeFilter,
    /// Also draw the bitmap on stderr
    #[clap(long)]
    preview: bool,
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ResizeFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(value: ResizeFilter) -> Self {
        match value {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

fn parse_identifier(name: &str) -> Result<String, String> {
    if is_c_identifier(name) {
        Ok(name.to_string())
    } else {
        Err(format!("`{name}` is not a valid C identifier"))
    }
}

fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}

fn run<W: Write>(
    args: Args,
    prompt: &mut dyn PathPrompt,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    let file = match args.file {
        Some(file) => Some(file),
        None => prompt.prompt_for_path()?,
    };
    let Some(file) = file else {
        writeln!(out, "No file selected.")?;
        return Ok(());
    };

    let options = ConvertOptions {
        width: args.width,
        height: args.height,
        name: args.name,
        filter: args.filter.into(),
    };
    let bitmap = convert(&file, &options)?;
    if args.preview {
        eprintln!("{}", bitmap.preview());
    }
    writeln!(out, "{}", bitmap.to_c_array(&options.name))?;
    info!("Done");
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(level_filter(args.verbose))
        .with_writer(io::stderr)
        .init();

    let mut prompt = default_prompt();
    run(args, prompt.as_mut(), &mut io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use image::{Rgba, RgbaImage};
    use progmem_convert::prompt::StdinPrompt;
    use progmem_convert::ConvertError;
    use std::io::Cursor;
    use tempfile::TempDir;

    struct NeverAsked;

    impl PathPrompt for NeverAsked {
        fn prompt_for_path(&mut self) -> Result<Option<PathBuf>, ConvertError> {
            panic!("prompt shown although a file was given");
        }
    }

    fn run_to_string(args: &[&str], prompt: &mut dyn PathPrompt) -> String {
        let args = Args::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        run(args, prompt, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn cancelled_prompt_prints_only_the_notice() {
        let mut shown = Vec::new();
        let mut prompt = StdinPrompt::with_io(Cursor::new("\n"), &mut shown);
        let out = run_to_string(&["png2progmem"], &mut prompt);
        assert_eq!(out, "No file selected.\n");
    }

    #[test]
    fn prompted_path_is_converted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dot.png");
        RgbaImage::from_fn(3, 1, |x, _| Rgba([0, 0, 0, if x == 1 { 255 } else { 0 }]))
            .save(&path)
            .unwrap();

        let mut shown = Vec::new();
        let line = format!("{}\n", path.display());
        let mut prompt = StdinPrompt::with_io(Cursor::new(line), &mut shown);
        let out = run_to_string(
            &["png2progmem", "--width", "3", "--height", "1", "--name", "dot", "--filter", "nearest"],
            &mut prompt,
        );
        assert_eq!(out, "const unsigned char dot [] PROGMEM = {\n\t0xa0\n};\n");
    }

    #[test]
    fn file_argument_skips_the_prompt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("row.png");
        RgbaImage::from_fn(8, 1, |x, _| Rgba([9, 9, 9, if x < 4 { 0 } else { 255 }]))
            .save(&path)
            .unwrap();

        let file = path.to_str().unwrap();
        let out = run_to_string(
            &["png2progmem", file, "--width", "8", "--height", "1", "--filter", "nearest"],
            &mut NeverAsked,
        );
        assert_eq!(
            out,
            "const unsigned char epd_bitmap_wifi0_70x70 [] PROGMEM = {\n\t0xf0\n};\n"
        );
    }

    #[test]
    fn unreadable_file_names_the_path() {
        let args = Args::try_parse_from(["png2progmem", "/no/such/icon.png"]).unwrap();
        let err = run(args, &mut NeverAsked, &mut Vec::<u8>::new()).unwrap_err();
        assert!(err.to_string().contains("/no/such/icon.png"), "{err}");
    }

    #[test]
    fn cli_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_match_wifi_icon() {
        let args = Args::try_parse_from(["png2progmem"]).unwrap();
        assert_eq!(args.file, None);
        assert_eq!(args.width, 70);
        assert_eq!(args.height, 70);
        assert_eq!(args.name, "epd_bitmap_wifi0_70x70");
        assert_eq!(args.filter, ResizeFilter::CatmullRom);
        assert!(!args.preview);
        assert_eq!(level_filter(args.verbose), LevelFilter::WARN);
    }

    #[test]
    fn overrides() {
        let args = Args::try_parse_from([
            "png2progmem",
            "logo.png",
            "--width",
            "128",
            "--height",
            "32",
            "--name",
            "logo_128x32",
            "--filter",
            "nearest",
            "--preview",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.file, Some(PathBuf::from("logo.png")));
        assert_eq!((args.width, args.height), (128, 32));
        assert_eq!(args.name, "logo_128x32");
        assert_eq!(FilterType::from(args.filter), FilterType::Nearest);
        assert!(args.preview);
        assert_eq!(level_filter(args.verbose), LevelFilter::DEBUG);
    }

    #[test]
    fn rejects_bad_identifier() {
        assert!(Args::try_parse_from(["png2progmem", "--name", "70x70"]).is_err());
        assert!(Args::try_parse_from(["png2progmem", "--name", "wifi-icon"]).is_err());
    }

    #[test]
    fn filter_names_are_kebab_case() {
        let args = Args::try_parse_from(["png2progmem", "--filter", "catmull-rom"]).unwrap();
        assert_eq!(args.filter, ResizeFilter::CatmullRom);
        assert!(Args::try_parse_from(["png2progmem", "--filter", "bicubic"]).is_err());
    }
}
