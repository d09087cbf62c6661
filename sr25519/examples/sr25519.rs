use rand::SeedableRng;
use rand::rngs::StdRng;
use sr25519::{ChainCode, DeriveJunction, Keypair, PublicKey, Signature};

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let root = Keypair::generate(&mut rng);

    let path = [
        DeriveJunction::Hard(ChainCode([1u8; 32])),
        DeriveJunction::Soft(ChainCode([2u8; 32])),
    ];
    let account = root.derive_path(&mut rng, &path);

    let kp_bytes = bincode::serialize(&account).expect("serialize keypair");
    let pk_bytes = bincode::serialize(account.public()).expect("serialize public key");

    let msg = b"hello sr25519";
    let sig = account.sign(&mut rng, msg);
    let sig_bytes = bincode::serialize(&sig).expect("serialize signature");

    let account2: Keypair = bincode::deserialize(&kp_bytes).expect("deserialize keypair");
    let pk2: PublicKey = bincode::deserialize(&pk_bytes).expect("deserialize public key");
    let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize signature");

    assert!(pk2.verify(msg, &sig2));
    assert_eq!(account2.public(), &pk2);

    // The soft step can be repeated by anyone who knows the hard parent's public key.
    let (hard_parent, _) = root.derive_hard(Some(path[0].chain_code()));
    let watched = hard_parent
        .public()
        .derive_path(&path[1..])
        .expect("soft-only path");
    assert_eq!(watched, pk2);

    println!("account public key: {:02x?}", pk2.to_bytes());
}
