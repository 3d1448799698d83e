#[macro_use]
extern crate clap;

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use acpu::{constants, ExitCode, Memory, Processor};
use clap::Arg;

#[derive(Debug)]
enum IOErrorContext {
    ReadInput,
    WriteOutput,
}

#[derive(Debug)]
enum Error {
    Io(io::Error, IOErrorContext, PathBuf),
    ImageTooLarge(usize),
    Emulation(ExitCode),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err, context, path) => write!(
                f,
                "{} file \"{}\" failed: {}",
                match context {
                    IOErrorContext::ReadInput => "Reading input",
                    IOErrorContext::WriteOutput => "Writing output",
                },
                path.display(),
                err
            ),
            Error::ImageTooLarge(size) => write!(
                f,
                "Binary image is {} bytes but memory holds {}",
                size,
                constants::MAX_MEMORY
            ),
            Error::Emulation(ExitCode::UnknownInstruction(word)) => {
                write!(f, "Unrecognized instruction 0x{:08x}", word)
            }
            Error::Emulation(ExitCode::BadMemoryAccess) => {
                write!(f, "Memory access out of bounds")
            }
            Error::Emulation(ExitCode::Halted) => Ok(()),
        }
    }
}

fn main() {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("INPUT")
                .help("The binary image to execute")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("OUTPUT")
                .help("Where to write the final state (defaults to stdout)")
                .index(2),
        )
        .get_matches();

    let input = matches.value_of("INPUT").unwrap();
    let output = matches.value_of("OUTPUT");

    if let Err(err) = emulate(input, output) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn emulate(input: &str, output: Option<&str>) -> Result<(), Error> {
    let input_path = Path::new(input);
    let image = fs::read(input_path)
        .map_err(|err| Error::Io(err, IOErrorContext::ReadInput, input_path.to_owned()))?;

    let memory = Memory::load_image(&image).ok_or_else(|| Error::ImageTooLarge(image.len()))?;
    let mut processor = Processor::new(memory);

    match processor.run() {
        ExitCode::Halted => {}
        code => {
            eprintln!("Error: {}", Error::Emulation(code));
            eprintln!("State Dump:");
            let stderr = io::stderr();
            processor
                .write_state(&mut stderr.lock())
                .map_err(|err| Error::Io(err, IOErrorContext::WriteOutput, PathBuf::new()))?;
            process::exit(1);
        }
    }

    match output {
        Some(path_str) => {
            let path = PathBuf::from(path_str);
            let file = File::create(&path)
                .map_err(|err| Error::Io(err, IOErrorContext::WriteOutput, path.clone()))?;
            let mut writer = BufWriter::new(file);
            processor
                .write_state(&mut writer)
                .and_then(|()| writer.flush())
                .map_err(|err| Error::Io(err, IOErrorContext::WriteOutput, path))?;
        }
        None => {
            let stdout = io::stdout();
            processor
                .write_state(&mut stdout.lock())
                .map_err(|err| Error::Io(err, IOErrorContext::WriteOutput, PathBuf::new()))?;
        }
    }

    Ok(())
}
