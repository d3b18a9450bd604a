use agora_schnorr::parse::{parse_pubkey, parse_signature};
use agora_schnorr::settings::get_settings;
use agora_schnorr::{CurveGroup, Error, Message, Point, Schnorr, Signature};
use sha2::Sha256;
use structopt::StructOpt;

use std::process::ExitCode;

#[derive(StructOpt)]
struct Opt {
    #[structopt(long, help = "public key as json or SEC1 hex")]
    public: String,
    #[structopt(long, help = "signature as json or r || s hex")]
    signature: String,
    #[structopt(long, help = "signed message")]
    message: String,
}

fn decode_public<G: CurveGroup>(group: &G, public: &str) -> Result<Point, Error> {
    if public.trim_start().starts_with('{') {
        return group.decode_point(public);
    }
    let point = parse_pubkey(public, group.field_size())?;
    match point.coordinates() {
        Some((x, y)) => group.point(x.clone(), y.clone()),
        None => Ok(point),
    }
}

fn decode_signature(signature: &str, width: usize) -> Result<Signature, Error> {
    if signature.trim_start().starts_with('{') {
        signature.parse()
    } else {
        Ok(parse_signature(signature, width)?)
    }
}

fn run(opt: Opt) -> Result<bool, Box<dyn std::error::Error>> {
    let settings = get_settings()?;
    let schnorr =
        Schnorr::<_, Sha256>::with_encoding(settings.curve.group(), settings.challenge_encoding);
    let group = schnorr.group();

    let public = decode_public(group, &opt.public)?;
    let signature = decode_signature(&opt.signature, group.field_size())?;
    Ok(schnorr.verify(&signature, &Message::from(opt.message.as_str()), &public)?)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    match run(Opt::from_args()) {
        Ok(true) => {
            println!("Signature OK");
            ExitCode::SUCCESS
        }
        Ok(false) => {
            println!("Signature invalid");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}
