//! Simple decoder to inspect Clarity result hex.
//!
//! Usage: decode_hex <hex-string>

use clarity_args::{value_from_hex, Value};

fn format_value(value: &Value, indent: usize) -> String {
    let pad = "  ".repeat(indent);
    match value {
        Value::Int(n) => format!("{}", n),
        Value::UInt(n) => format!("u{}", n),
        Value::Bool(b) => format!("{}", b),
        Value::Buffer(bytes) => {
            if bytes.len() > 32 {
                format!("BUFF[{} bytes]", bytes.len())
            } else {
                format!("0x{}", clarity_args::util::bytes_to_hex(bytes))
            }
        }
        Value::StringAscii(s) => format!("\"{}\"", s),
        Value::StringUtf8(s) => format!("u\"{}\"", s),
        Value::Principal(p) => format!("'{}", p),
        Value::OptionalNone => "none".to_string(),
        Value::OptionalSome(inner) => format!("(some {})", format_value(inner, indent)),
        Value::ResponseOk(inner) => format!("(ok {})", format_value(inner, indent)),
        Value::ResponseErr(inner) => format!("(err {})", format_value(inner, indent)),
        Value::List(items) => {
            let mut out = String::from("(list");
            for item in items {
                out.push(' ');
                out.push_str(&format_value(item, indent));
            }
            out.push(')');
            out
        }
        Value::Tuple(entries) => {
            let mut out = String::from("{\n");
            for (name, field) in entries {
                out.push_str(&format!(
                    "{}  {}: {},\n",
                    pad,
                    name,
                    format_value(field, indent + 1)
                ));
            }
            out.push_str(&format!("{}}}", pad));
            out
        }
    }
}

fn main() {
    let hex = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "0x0701000000000000000000000000000009c4".to_string());

    println!("Decoding: {}", hex);
    println!("Input size: {} hex chars", hex.trim_start_matches("0x").len());

    match value_from_hex(&hex) {
        Ok(value) => {
            println!("\n{}", format_value(&value, 0));
        }
        Err(err) => {
            eprintln!("Failed to decode: {}", err);
            std::process::exit(1);
        }
    }
}
