use crate::config::sys_config;
use embedded_hal::adc::{Channel, OneShot};
use stm32f4xx_hal::{adc::Adc, pac::ADC1};

pub fn millivolts_to_deg_c(millivolts: u16) -> f32 {
    (millivolts as f32 - sys_config::SENSOR_OFFSET_MV) / sys_config::SENSOR_MV_PER_DEG_C
}

// readings outside the sensor's rated range mean a loose or shorted probe
pub fn plausible(deg_c: f32) -> bool {
    deg_c >= sys_config::SENSOR_MIN_DEG_C && deg_c <= sys_config::SENSOR_MAX_DEG_C
}

// None on conversion error or an implausible value
pub fn read_deg_c<PIN>(adc: &mut Adc<ADC1>, probe: &mut PIN) -> Option<f32>
where
    PIN: Channel<ADC1, ID = u8>,
{
    let sample: u16 = nb::block!(OneShot::<ADC1, u16, PIN>::read(adc, probe)).ok()?;
    let deg_c = millivolts_to_deg_c(adc.sample_to_millivolts(sample));
    if plausible(deg_c) {
        Some(deg_c)
    } else {
        None
    }
}
