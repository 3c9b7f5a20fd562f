use datakit_hash::{hash_hex, user_id};

fn main() {
    // Cargar .env si existe para obtener DATAKIT_SALT
    let _ = dotenvy::dotenv();
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("user-id") => {
            if let Some(username) = args.get(2) {
                match user_id(username) {
                    Ok(id) => println!("{id}"),
                    Err(e) => {
                        eprintln!("[datakit user-id] {e}");
                        std::process::exit(4);
                    }
                }
            } else {
                eprintln!("Uso: datakit user-id <USERNAME>");
                std::process::exit(2);
            }
        }
        Some("hash") => {
            let mut value: Option<String> = None;
            let mut salt: Option<String> = None;
            let mut i = 2;
            while i < args.len() {
                match args[i].as_str() {
                    "--value" => {
                        i += 1;
                        if i < args.len() { value = Some(args[i].clone()); }
                    }
                    "--salt" => {
                        i += 1;
                        if i < args.len() { salt = Some(args[i].clone()); }
                    }
                    _ => {}
                }
                i += 1;
            }
            if let (Some(value), Some(salt)) = (value, salt) {
                match hash_hex(&value, &salt) {
                    Ok(digest) => println!("{digest}"),
                    Err(e) => {
                        eprintln!("[datakit hash] {e}");
                        std::process::exit(4);
                    }
                }
            } else {
                eprintln!("Uso: datakit hash --value <TXT> --salt <TXT>");
                std::process::exit(2);
            }
        }
        Some("convert") => {
            let mut input: Option<String> = None;
            let mut sheet: Option<String> = None;
            let mut i = 2;
            while i < args.len() {
                match args[i].as_str() {
                    "--input" => {
                        i += 1;
                        if i < args.len() { input = Some(args[i].clone()); }
                    }
                    "--sheet" => {
                        i += 1;
                        if i < args.len() { sheet = Some(args[i].clone()); }
                    }
                    _ => {}
                }
                i += 1;
            }
            if let Some(input) = input {
                match datakit_file::convert_excel_to_parquet(&input, sheet.as_deref()) {
                    Ok(out) => println!("{}", out.display()),
                    Err(e) => {
                        eprintln!("[datakit convert] {e}");
                        std::process::exit(5);
                    }
                }
            } else {
                eprintln!("Uso: datakit convert --input <XLSX> [--sheet <NAME>]");
                std::process::exit(2);
            }
        }
        _ => {
            eprintln!("Uso: datakit <user-id|hash|convert> ...");
            std::process::exit(2);
        }
    }
}
