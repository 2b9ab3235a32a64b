//! ST7789 panel — 320×170 LCD over SPI with DMA, showing the playfield through a [`Screen`].

use embedded_graphics::{
    geometry::Point,
    pixelcolor::{
        Rgb565,
        RgbColor,
    },
};
use embedded_hal_bus::spi::ExclusiveDevice;
use esp_hal::{
    Async,
    dma::{
        DmaRxBuf,
        DmaTxBuf,
    },
    dma_buffers,
    gpio::{
        Level,
        Output,
        OutputConfig,
    },
    spi::master::Spi,
    time::Rate,
};

use super::DisplayResources;
use crate::{
    config::{
        HEIGHT,
        WIDTH,
    },
    frame::Screen,
    render::DisplaySink,
};

type SpiInterface<'a> = mipidsi::interface::SpiInterface<
    'a,
    ExclusiveDevice<esp_hal::spi::master::SpiDmaBus<'a, Async>, Output<'a>, esp_hal::delay::Delay>,
    Output<'a>,
>;

/// The badge's ST7789 display.
pub type Display<'a> = mipidsi::Display<SpiInterface<'a>, mipidsi::models::ST7789, Output<'a>>;

const PANEL_W: i32 = 320;
const PANEL_H: i32 = 170;
const SCALE: u32 = 2;

/// Lit display with the playfield centered on it.
pub struct Panel<'a> {
    screen: Screen<Display<'a>>,
    _backlight: Output<'a>,
}

impl<'a> From<DisplayResources<'a>> for Panel<'a> {
    fn from(res: DisplayResources<'a>) -> Self {
        let (rx_buffer, rx_descriptors, tx_buffer, tx_descriptors) = dma_buffers!(32000);
        let dma_rx_buf = DmaRxBuf::new(rx_descriptors, rx_buffer).unwrap();
        let dma_tx_buf = DmaTxBuf::new(tx_descriptors, tx_buffer).unwrap();

        let mut delay = esp_hal::delay::Delay::new();

        let dc = Output::new(res.dc, Level::Low, OutputConfig::default());
        let mut rst = Output::new(res.rst, Level::Low, OutputConfig::default());
        rst.set_high();

        let spi = Spi::new(
            res.spi,
            esp_hal::spi::master::Config::default().with_frequency(Rate::from_mhz(80)),
        )
        .unwrap()
        .with_sck(res.sck)
        .with_mosi(res.mosi)
        .with_miso(res.miso)
        .with_dma(res.dma)
        .with_buffers(dma_rx_buf, dma_tx_buf)
        .into_async();

        let cs = Output::new(res.cs, Level::High, OutputConfig::default());
        let spi_device = ExclusiveDevice::new(spi, cs, delay).unwrap();

        let buffer = crate::mk_static!([u8; 32000], [0_u8; 32000]);
        let di = mipidsi::interface::SpiInterface::new(spi_device, dc, buffer);

        let display = mipidsi::Builder::new(mipidsi::models::ST7789, di)
            .reset_pin(rst)
            .display_size(170, 320)
            .invert_colors(mipidsi::options::ColorInversion::Inverted)
            .orientation(
                mipidsi::options::Orientation::new().rotate(mipidsi::options::Rotation::Deg90),
            )
            .display_offset(35, 0)
            .init(&mut delay)
            .unwrap();

        let origin = Point::new(
            (PANEL_W - WIDTH * SCALE as i32) / 2,
            (PANEL_H - HEIGHT * SCALE as i32) / 2,
        );
        let screen = Screen::new(display, Rgb565::WHITE, Rgb565::BLACK)
            .with_origin(origin)
            .with_scale(SCALE);

        Self {
            screen,
            _backlight: Output::new(res.backlight, Level::High, OutputConfig::default()),
        }
    }
}

impl DisplaySink for Panel<'_> {
    fn clear(&mut self) {
        self.screen.clear();
    }

    fn set_pixel(&mut self, x: i32, y: i32) {
        self.screen.set_pixel(x, y);
    }

    fn present(&mut self) {
        self.screen.present();
    }
}
