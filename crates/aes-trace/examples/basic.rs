//! Encrypts the FIPS-197 example block and prints every step.

use aes_trace::TracingCipher;

fn main() -> Result<(), aes_trace::Error> {
    let key: Vec<u8> = (0u8..16).collect();
    let plaintext: Vec<u8> = (0u8..16).map(|i| i * 0x11).collect();

    let cipher = TracingCipher::new(&key)?;
    for stage in cipher.key_expansion() {
        println!("{stage}\n");
    }

    let enc = cipher.encrypt(&plaintext)?;
    for (i, line) in enc.lines().iter().enumerate() {
        println!("[{:02}] {line}\n", i + 1);
    }

    let dec = cipher.decrypt(&enc.cipher_text)?;
    assert_eq!(dec.plain_text.as_slice(), plaintext.as_slice());
    println!("round trip succeeded");
    Ok(())
}
