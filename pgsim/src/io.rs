use clap::Args;
use std::{
    fmt,
    fs::File,
    io::{BufReader, BufWriter, Read, Write, stdin, stdout},
    path::PathBuf,
    str::FromStr,
};
use tracing::{Level, event};

/// Where `solve` reads its scenario document and writes its report
#[derive(Args)]
pub struct ScenarioArgs {
    /// The scenario JSON file ("-" implies stdin)
    #[arg(value_parser = clap::value_parser!(Stream))]
    input: Stream,

    #[command(flatten)]
    output: OutputArgs,
}

impl ScenarioArgs {
    pub fn read(&self) -> anyhow::Result<Box<dyn Read>> {
        event!(Level::DEBUG, input = %self.input, "reading scenario");
        match &self.input {
            Stream::Path(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
            Stream::Std => Ok(Box::new(stdin().lock())),
        }
    }

    pub fn write(&self) -> anyhow::Result<Box<dyn Write>> {
        self.output.write()
    }
}

/// Where a report, preset listing or CSV export is written
#[derive(Args)]
pub struct OutputArgs {
    /// The output file ("-" implies stdout)
    #[arg(short, long, default_value = "-", value_parser = clap::value_parser!(Stream))]
    output: Stream,
}

impl OutputArgs {
    pub fn write(&self) -> anyhow::Result<Box<dyn Write>> {
        event!(Level::DEBUG, output = %self.output, "opening output");
        match &self.output {
            Stream::Path(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
            Stream::Std => Ok(Box::new(stdout().lock())),
        }
    }
}

/// A file, or the process's standard input or output when given as `-`
#[derive(Clone, Debug, PartialEq)]
enum Stream {
    Path(PathBuf),
    Std,
}

impl FromStr for Stream {
    type Err = <PathBuf as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(Self::Std)
        } else {
            Ok(Self::Path(s.parse()?))
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Std => f.write_str("-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_means_standard_streams() {
        assert_eq!("-".parse::<Stream>(), Ok(Stream::Std));
        assert_eq!(
            "payoffs.csv".parse::<Stream>(),
            Ok(Stream::Path(PathBuf::from("payoffs.csv")))
        );
    }

    #[test]
    fn streams_display_as_given() {
        assert_eq!(Stream::Std.to_string(), "-");
        assert_eq!(
            Stream::Path(PathBuf::from("reports/sauces.json")).to_string(),
            "reports/sauces.json"
        );
    }
}
