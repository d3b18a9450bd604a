use agora_schnorr::parse::encode_pubkey;
use agora_schnorr::settings::get_settings;
use agora_schnorr::{CurveGroup, Keypair};
use structopt::StructOpt;

use std::error::Error;

#[derive(StructOpt)]
struct Opt {
    #[structopt(long, help = "print the public key as SEC1 hex instead of json")]
    hex: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();
    let opt = Opt::from_args();
    let settings = get_settings()?;

    let group = settings.curve.group();
    let keypair = Keypair::random(&group, &mut rand_core::OsRng)?;

    println!("curve: {}", group.name());
    println!("private: 0x{}", keypair.private().to_str_radix(16));
    if opt.hex {
        println!("public: {}", encode_pubkey(keypair.public(), group.field_size()));
    } else {
        println!("public: {}", keypair.public().to_json());
    }
    Ok(())
}
