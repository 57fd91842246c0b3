//! Example: Texture Layout
//!
//! Sizes textures for tensors of various shapes and estimates the device
//! memory each format needs.
//!
//! Run with:
//!
//! ```bash
//! cargo run --example texture_layout
//! ```

use texture_encoder::{
    estimate_texture_bytes, ChannelCount, FormatDescriptor, TextureLayout,
    DEFAULT_MAX_TEXTURE_SIZE,
};

fn main() {
    println!("=== Texture Layout Example ===\n");

    let formats = [
        ("R32F", FormatDescriptor::float32(ChannelCount::One)),
        ("RGBA32F", FormatDescriptor::float32(ChannelCount::Four)),
        ("RGBA32F packed", FormatDescriptor::rgba_float32(ChannelCount::One)),
        ("RGBA8", FormatDescriptor::uint8(ChannelCount::Four)),
    ];
    let shapes: [&[usize]; 3] = [&[1, 768], &[32, 128, 128], &[4096, 4096]];

    for shape in shapes {
        let elements: usize = shape.iter().product();
        println!("Tensor {shape:?} ({elements} elements):");
        for (name, descriptor) in &formats {
            match TextureLayout::for_elements(elements, descriptor, DEFAULT_MAX_TEXTURE_SIZE) {
                Ok(layout) => {
                    let bytes = estimate_texture_bytes(descriptor, layout.texel_count());
                    println!(
                        "   {name:<15} {:>5} x {:<5} {:>10} bytes",
                        layout.width, layout.height, bytes
                    );
                }
                Err(e) => println!("   {name:<15} {e}"),
            }
        }
        println!();
    }
}
