//! Print every palette as a row of truecolor swatches.

use colorbrewer::Scheme;

fn main() {
    for scheme in Scheme::ALL {
        for n in Scheme::CLASSES {
            let palette = match scheme.palette(n) {
                Ok(p) => p,
                Err(e) => {
                    println!("error: {}", e);
                    continue;
                }
            };
            print!("{:>6} {:>2} ", scheme, n);
            for c in palette.colors() {
                print!("\x1b[48;2;{};{};{}m  \x1b[0m", c.r(), c.g(), c.b());
            }
            println!();
        }
    }
}
