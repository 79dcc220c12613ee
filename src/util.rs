pub use {clap::Parser, grid::*};

use {
    memmap::Mmap,
    nom::{
        bytes::complete::tag,
        character::complete::digit1,
        combinator::{map_res, opt, recognize},
        sequence::tuple,
        IResult,
    },
    num::Integer,
    std::{
        any::type_name,
        fmt::Debug,
        fs::File,
        io::{Error as IoError, ErrorKind, Result as IoResult},
        str::{from_utf8, FromStr, Utf8Error},
    },
};

mod grid;

/// Arguments shared by the individual puzzle parts
#[derive(Debug, Parser)]
pub struct PartArgs {
    /// Print extra information, if there is any
    #[arg(short, long, default_value_t)]
    pub verbose: bool,
}

/// Arguments for program execution
#[derive(Debug, Parser)]
pub struct Args {
    /// Input file path, defaulting to `input/d<day>.txt`
    #[arg(short, long, default_value_t)]
    input_file_path: String,

    /// The day to run
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: u8,

    /// The part to run, both if omitted
    #[arg(short, long, default_value_t, value_parser = clap::value_parser!(u8).range(0..=2))]
    pub part: u8,

    #[command(flatten)]
    pub part_args: PartArgs,
}

impl Args {
    fn input_file_path(&self) -> String {
        if self.input_file_path.is_empty() {
            format!("input/d{}.txt", self.day)
        } else {
            self.input_file_path.clone()
        }
    }

    fn try_parse_input<S>(&self) -> Option<S>
    where
        S: for<'a> TryFrom<&'a str>,
        for<'a> <S as TryFrom<&'a str>>::Error: Debug,
    {
        let file_path: String = self.input_file_path();

        // SAFETY: Nothing else is expected to modify the input file while it's mapped here
        let parse_result: IoResult<Option<S>> = unsafe {
            open_utf8_file(&file_path, |input: &str| match input.try_into() {
                Ok(solution) => Some(solution),
                Err(error) => {
                    eprintln!(
                        "Failed to parse \"{file_path}\" as {}:\n{error:#?}",
                        type_name::<S>()
                    );

                    None
                }
            })
        };

        parse_result.unwrap_or_else(|error| {
            eprintln!("Failed to open UTF-8 file \"{file_path}\":\n{error}");

            None
        })
    }
}

/// Per-day entry points, implemented by each day's `Solution` over its parsed input
pub trait RunParts
where
    Self: Sized + for<'a> TryFrom<&'a str>,
    for<'a> <Self as TryFrom<&'a str>>::Error: Debug,
{
    fn part_one_internal(&mut self, args: &PartArgs);
    fn part_two_internal(&mut self, args: &PartArgs);

    fn part_one(args: &Args) {
        if let Some(mut solution) = args.try_parse_input::<Self>() {
            solution.part_one_internal(&args.part_args);
        }
    }

    fn part_two(args: &Args) {
        if let Some(mut solution) = args.try_parse_input::<Self>() {
            solution.part_two_internal(&args.part_args);
        }
    }

    fn both(args: &Args) {
        if let Some(mut solution) = args.try_parse_input::<Self>() {
            solution.part_one_internal(&args.part_args);
            solution.part_two_internal(&args.part_args);
        }
    }
}

#[derive(Clone)]
pub struct Day {
    pub part_one: fn(&Args),
    pub part_two: fn(&Args),
    pub both: fn(&Args),
}

impl Day {
    fn run(&self, args: &Args) {
        match args.part {
            0_u8 => (self.both)(args),
            1_u8 => (self.part_one)(args),
            2_u8 => (self.part_two)(args),
            part => unreachable!(
                "A valid Args will have a part value in the range 0..=2, but {part} was \
                encountered.\n\
                Args:\n\
                {args:#?}"
            ),
        }
    }
}

pub struct DayParams {
    pub string: &'static str,
    pub day: Day,
}

#[derive(Default)]
pub struct Solutions(Vec<(u8, Day)>);

impl Solutions {
    pub fn run(&self, args: &Args) {
        match self.0.iter().find(|(day, _)| *day == args.day) {
            Some((_, day)) => day.run(args),
            None => panic!(
                "Queried day {} has no registered solution.\n\
                Args:\n\
                {args:#?}",
                args.day
            ),
        }
    }

    pub fn from_day_params(day_params: Vec<DayParams>) -> Self {
        Self(
            day_params
                .into_iter()
                .filter_map(|DayParams { string, day }| {
                    string
                        .strip_prefix('d')
                        .and_then(|day_str: &str| u8::from_str(day_str).ok())
                        .map_or_else(
                            || {
                                eprintln!("Invalid day module name \"{string}\"");

                                None
                            },
                            |day_index: u8| Some((day_index, day)),
                        )
                })
                .collect(),
        )
    }
}

#[macro_export]
macro_rules! solutions {
    [ $( $day:ident ),* $(,)? ] => {
        $(
            pub mod $day;
        )*

        pub fn solutions() -> &'static Solutions {
            static ONCE_LOCK: std::sync::OnceLock<Solutions> = std::sync::OnceLock::new();

            ONCE_LOCK.get_or_init(|| {
                Solutions::from_day_params(vec![ $(
                    DayParams {
                        string: stringify!($day),
                        day: Day {
                            part_one: $day::Solution::part_one,
                            part_two: $day::Solution::part_two,
                            both: $day::Solution::both,
                        },
                    },
                )* ])
            })
        }
    };
}

/// Memory-maps the UTF-8 file at `file_path` and passes its contents to `f` as a `&str`
///
/// # Safety
///
/// `Mmap::map` cannot prevent an external process from modifying the file while it's mapped, and
/// the borrow handed to `f` assumes the contents stay put.
pub unsafe fn open_utf8_file<T, F: FnOnce(&str) -> T>(file_path: &str, f: F) -> IoResult<T> {
    let file: File = File::open(file_path)?;

    // SAFETY: This operation is unsafe
    let mmap: Mmap = Mmap::map(&file)?;
    let input: &str = from_utf8(&mmap)
        .map_err(|utf8_error: Utf8Error| IoError::new(ErrorKind::InvalidData, utf8_error))?;

    Ok(f(input))
}

pub const ZERO_OFFSET: u8 = b'0';

pub trait Parse: Sized {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self>;
}

/// Parses a decimal integer, with an optional leading minus sign for signed types
pub fn parse_integer<'i, I: FromStr + Integer>(input: &'i str) -> IResult<&'i str, I> {
    map_res(recognize(tuple((opt(tag("-")), digit1))), I::from_str)(input)
}

#[test]
fn test_parse_integer() {
    assert_eq!(parse_integer::<u32>("1024"), Ok(("", 1024_u32)));
    assert_eq!(parse_integer::<i32>("-37 12"), Ok((" 12", -37_i32)));
    assert!(parse_integer::<u32>("-37").is_err());
    assert!(parse_integer::<u32>("spiral").is_err());
}
