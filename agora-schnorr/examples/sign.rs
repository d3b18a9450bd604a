use agora_schnorr::parse::{encode_signature, parse_biguint};
use agora_schnorr::settings::get_settings;
use agora_schnorr::{CurveGroup, Keypair, Message, Schnorr};
use sha2::Sha256;
use structopt::StructOpt;

use std::error::Error;

#[derive(StructOpt)]
struct Opt {
    #[structopt(long, help = "private scalar, decimal or 0x-prefixed hex")]
    private: String,
    #[structopt(long, help = "message to sign")]
    message: String,
    #[structopt(long, help = "print the signature as r || s hex instead of json")]
    hex: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();
    let opt = Opt::from_args();
    let settings = get_settings()?;

    let schnorr =
        Schnorr::<_, Sha256>::with_encoding(settings.curve.group(), settings.challenge_encoding);
    let keypair = Keypair::from_private(schnorr.group(), parse_biguint(&opt.private)?)?;
    let signature = schnorr.sign(
        &mut rand_core::OsRng,
        &Message::from(opt.message.as_str()),
        &keypair,
    )?;

    if opt.hex {
        println!(
            "{}",
            encode_signature(&signature, schnorr.group().field_size())
        );
    } else {
        println!("{}", signature.to_json());
    }
    Ok(())
}
