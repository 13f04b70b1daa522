#![no_main]
#![no_std]

mod config;
mod sensor;

#[rtic::app(device = stm32f4xx_hal::pac, peripherals = true, dispatchers = [SPI2])]
mod app {
    use crate::config::sys_config;
    use crate::sensor;
    use core::fmt::Write;
    use cortex_m::asm;
    use panic_write::PanicHandler;
    use stm32f4xx_hal::{
        adc::{config::AdcConfig, Adc},
        gpio::{Analog, PA0},
        pac::{ADC1, USART2},
        prelude::*,
        serial::{Config, Serial, Tx},
    };
    use systick_monotonic::{fugit::Duration, Systick};
    use thermotrend::conditioning::SensorConditioner;
    use thermotrend::config::TREND_COUNT;
    use thermotrend::filtering::trend::Trend;
    use thermotrend::rounding::round_to_decimals;

    #[shared]
    struct Shared {
        tx: core::pin::Pin<PanicHandler<Tx<USART2>>>,
        conditioner: SensorConditioner<TREND_COUNT>,
    }

    #[local]
    struct Local {
        adc: Adc<ADC1>,
        probe: PA0<Analog>,
        faulted: bool,
        reports: u32,
    }

    #[monotonic(binds = SysTick, default = true)]
    type MonoTimer = Systick<1000>;

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        // configure clocks
        let rcc = ctx.device.RCC.constrain();
        let mono = Systick::new(ctx.core.SYST, sys_config::SYSCLK_HZ);
        let clocks = rcc.cfgr.sysclk(sys_config::SYSCLK_HZ.Hz()).freeze();

        // set up uart tx
        let gpioa = ctx.device.GPIOA.split();
        let tx_pin = gpioa.pa2.into_alternate();
        let serial = Serial::tx(
            ctx.device.USART2,
            tx_pin,
            Config::default()
                .baudrate(sys_config::UART_BAUD.bps())
                .wordlength_8()
                .parity_none(),
            &clocks,
        )
        .unwrap();
        let mut tx = PanicHandler::new(serial);

        // set up temperature probe
        let mut probe = gpioa.pa0.into_analog();
        let mut adc = Adc::adc1(ctx.device.ADC1, true, AdcConfig::default());

        // seed only from a real reading; otherwise wait for the probe in sample_sensor
        let mut conditioner = SensorConditioner::<TREND_COUNT>::default();
        let faulted = match sensor::read_deg_c(&mut adc, &mut probe) {
            Some(first) => {
                conditioner.seed(first);
                writeln!(tx, "seeded at {} degC\r", first).unwrap();
                false
            }
            None => {
                writeln!(tx, "no valid probe reading, waiting\r").unwrap();
                true
            }
        };

        writeln!(tx, "system initialized\r").unwrap();

        sample_sensor::spawn_after(Duration::<u64, 1, 1000>::millis(sys_config::SAMPLE_PERIOD_MS))
            .unwrap();
        report::spawn_after(Duration::<u64, 1, 1000>::millis(sys_config::REPORT_PERIOD_MS))
            .unwrap();

        (
            Shared { tx, conditioner },
            Local {
                adc,
                probe,
                faulted,
                reports: 0,
            },
            init::Monotonics(mono),
        )
    }

    #[task(local=[adc, probe, faulted], shared=[tx, conditioner])]
    fn sample_sensor(mut cx: sample_sensor::Context) {
        match sensor::read_deg_c(cx.local.adc, cx.local.probe) {
            None => {
                if !*cx.local.faulted {
                    cx.shared.tx.lock(|tx| {
                        writeln!(tx, "probe fault\r").unwrap();
                    });
                    *cx.local.faulted = true;
                }
            }
            Some(deg_c) if *cx.local.faulted => {
                // history from before the fault is stale
                cx.shared.conditioner.lock(|conditioner| conditioner.seed(deg_c));
                cx.shared.tx.lock(|tx| {
                    writeln!(tx, "probe recovered, reseeded at {} degC\r", deg_c).unwrap();
                });
                *cx.local.faulted = false;
            }
            Some(deg_c) => {
                let transition = cx.shared.conditioner.lock(|conditioner| {
                    conditioner.sample(deg_c);
                    conditioner.take_transition()
                });
                if let Some((from, to)) = transition {
                    cx.shared.tx.lock(|tx| {
                        writeln!(tx, "trend {:?} -> {:?}\r", from, to).unwrap();
                    });
                }
            }
        }

        sample_sensor::spawn_after(Duration::<u64, 1, 1000>::millis(sys_config::SAMPLE_PERIOD_MS))
            .unwrap();
    }

    #[task(local=[reports], shared=[tx, conditioner])]
    fn report(cx: report::Context) {
        let tx = cx.shared.tx;
        let conditioner = cx.shared.conditioner;
        *cx.local.reports += 1;
        let dump = *cx.local.reports % sys_config::SNAPSHOT_EVERY_N_REPORTS == 0;

        (tx, conditioner).lock(|tx, conditioner| {
            if !conditioner.filter().is_seeded() {
                writeln!(tx, "waiting for probe\r").unwrap();
                return;
            }

            let trend = match conditioner.trend() {
                Trend::Rising => "rising",
                Trend::Falling => "falling",
                Trend::Stable => "stable",
            };
            writeln!(
                tx,
                "temp: {} degC, {}\r",
                round_to_decimals(conditioner.value(), sys_config::DISPLAY_DECIMALS),
                trend
            )
            .unwrap();

            if dump {
                write!(tx, "window:").unwrap();
                for value in conditioner.history().iter() {
                    write!(tx, " {}", round_to_decimals(value, 2)).unwrap();
                }
                writeln!(tx, "\r").unwrap();
            }
        });

        report::spawn_after(Duration::<u64, 1, 1000>::millis(sys_config::REPORT_PERIOD_MS))
            .unwrap();
    }

    #[idle]
    fn idle(_ctx: idle::Context) -> ! {
        loop {
            asm::nop();
        }
    }
}
