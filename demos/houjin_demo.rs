use houjin::generate::*;
use houjin::validate_number;

fn main() {
    println!("Government:             {}", generate_government());
    println!("Registered corporation: {}", generate_registered_corporation());
    println!("Non-registered:         {}", generate_non_registered());
    println!("Any:                    {}", generate());

    let input = "1234567890123";
    match validate_number(input) {
        Ok(()) => println!("\n{input} is valid"),
        Err(e) => println!("\n{input}: {e}"),
    }
}
