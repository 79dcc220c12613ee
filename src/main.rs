use aoc2017::*;

fn main() {
    solutions().run(&Args::parse());
}
