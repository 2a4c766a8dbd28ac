mod private_key;
mod pubkey;
mod signature;
