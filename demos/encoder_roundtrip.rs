//! Example: Encoder Round Trip
//!
//! Packs the same tensor through each texture format and reads it back,
//! printing the physical layout the device would see.
//!
//! Run with:
//!
//! ```bash
//! RUST_LOG=debug cargo run --example encoder_roundtrip
//! ```

use candle_core::{Device, Tensor};
use texture_encoder::{
    init_logging, DataEncoder, EncoderConfig, EncoderKind, LogConfig, Result, TypedBuffer,
    WordKind,
};

fn main() -> Result<()> {
    init_logging(&LogConfig::development());
    println!("=== Encoder Round Trip Example ===\n");

    let device = Device::Cpu;
    let tensor = Tensor::new(&[[0.5f32, 1.5], [2.5, 3.5]], &device)?;
    println!("Tensor {:?}: {:?}\n", tensor.dims(), tensor.to_vec2::<f32>()?);

    let configs = [
        EncoderConfig::new(),
        EncoderConfig::new().with_channels(4),
        EncoderConfig::new().with_kind(EncoderKind::RgbaFloat),
        EncoderConfig::new()
            .with_kind(EncoderKind::Uint8)
            .with_channels(4)
            .with_word_kind(WordKind::F32),
        EncoderConfig::new().with_kind(EncoderKind::HalfFloat),
    ];

    for config in configs {
        let encoder = config.build()?;
        let descriptor = encoder.descriptor();
        println!(
            "{:?} x{} (internal 0x{:04X}, transfer 0x{:04X}):",
            encoder.kind(),
            encoder.channel_size(),
            descriptor.internal_format,
            descriptor.transfer_format
        );

        let logical = TypedBuffer::from_tensor(&tensor)?;
        let n = logical.len();
        let texels = match encoder.encode(logical, n) {
            Ok(texels) => texels,
            Err(e) => {
                println!("   skipped: {e}\n");
                continue;
            }
        };
        println!("   physical: {} x {}", texels.len(), texels.kind().name());

        let restored = encoder.decode(texels, n)?.to_tensor(tensor.dims(), &device)?;
        println!("   restored: {:?}\n", restored.to_vec2::<f32>()?);
    }

    Ok(())
}
