use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use clap::Parser;

use carpet::framebuffer::{FrameBuffer, Pixel};
use carpet::raster::RasterSink;
use carpet::square::Square;

mod args;

use args::Args;

fn main() {
    let args = <Args as Parser>::parse();

    let mut fb = FrameBuffer::new(args.width, args.height);

    let mut sink = RasterSink::new(&mut fb, Pixel::white());
    carpet::subdivide(&mut sink, Square::unit(), 0);

    if let Err(e) = write_out(&fb, &args.output) {
        eprintln!("Could not write {:?}: {e}", args.output);
        std::process::exit(-1);
    }
}

fn write_out(fb: &FrameBuffer, name: &Path) -> Result<(), png::EncodingError> {
    let buf = unsafe {
        assert_eq!(std::mem::size_of::<Pixel>(), 4 * std::mem::size_of::<f32>());

        fb.as_f32_slice()
    };

    let mapped = buf.iter().map(|e| (e * 255.0) as u8).collect::<Vec<_>>();

    let file = File::create(name)?;
    let writer = BufWriter::new(file);
    let mut encoder = png::Encoder::new(writer, fb.width() as u32, fb.height() as u32);
    encoder.set_color(png::ColorType::Rgba);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&mapped)?;

    Ok(())
}
