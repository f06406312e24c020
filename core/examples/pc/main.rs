mod hardware;

use crate::hardware::{ErrorCard, Gui, SystemClock, HEIGHT, WIDTH};

use chip8_host::{report_fault, Config, EventQueue, HexKey, System};
use log::*;
use std::time::Duration;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
pub struct Opt {
    /// Timer period in microseconds
    #[structopt(short = "p", long = "period", default_value = "16666")]
    period: u64,
    /// Sound timer value loaded on each key press
    #[structopt(short = "b", long = "beep", default_value = "10")]
    beep: u8,
    /// Delay timer value loaded on each key press
    #[structopt(short = "d", long = "delay", default_value = "60")]
    delay: u8,
}

fn to_cfg(opt: &Opt) -> Config {
    Config::new().timer_period(Duration::from_micros(opt.period))
}

fn draw(vram: &mut [u32], key: Option<HexKey>, delay: u8, beeping: bool) {
    let bg = match key {
        Some(key) => 0x11 * u32::from(key.value()) * 0x010101,
        None => 0,
    };
    let fg = if beeping { 0xffcc00 } else { 0x00cc66 };
    let bar = usize::from(delay) * WIDTH / 256;

    for (i, px) in vram.iter_mut().enumerate() {
        let (x, y) = (i % WIDTH, i / WIDTH);
        *px = if y >= HEIGHT - 4 && x < bar { fg } else { bg };
    }
}

fn main() {
    let opt = Opt::from_args();

    use std::io::Write;

    let mut builder = env_logger::Builder::from_default_env();

    builder
        .format(|buf, record| {
            let ts = buf.timestamp_millis();

            writeln!(buf, "{}: {}: {}", ts, record.level(), record.args())
        })
        .init();

    let mut sys = match System::new(to_cfg(&opt), EventQueue::new(), SystemClock) {
        Ok(sys) => sys,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut gui = Gui::new();
    let mut card = ErrorCard::default();
    let mut vram = vec![0; WIDTH * HEIGHT];
    let mut previous = None;

    while gui.sched() {
        gui.keyupdate(sys.keypad_mut().source_mut());
        sys.poll();

        let key = sys.keypad().current_key();
        if key != previous {
            info!("Key: {}", key.map_or("-".to_string(), |k| k.to_string()));
            if key.is_some() {
                sys.delay_mut().load(opt.delay);
                sys.sound_mut().load(opt.beep);
            }
            previous = key;
        }

        if card.visible {
            vram.iter_mut().for_each(|px| *px = 0xff0000);
        } else {
            draw(&mut vram, key, sys.delay().value(), sys.sound().is_active());
        }

        if let Err(e) = gui.vramupdate(&vram) {
            if !card.visible {
                report_fault(&mut card, &e);
            }
        }

        spin_sleep::sleep(Duration::from_millis(16));
    }
}
