use std::fs;
use std::io::Write;
use std::path::Path;

// Writes a small set of synthetic waveform dumps so the viewer can be tried
// without a simulator run:
//
//   cargo run --bin generate_sample [DIR]     (default DIR: waves)
//
// Output format matches the simulator's dump files: a names row, a units
// row, then tab-separated samples with time in column 0.

fn rc_step(t: f64, v_step: f64, tau: f64) -> f64 {
    v_step * (1.0 - (-t / tau).exp())
}

fn sine(t: f64, amplitude: f64, freq: f64) -> f64 {
    amplitude * (2.0 * std::f64::consts::PI * freq * t).sin()
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// One dump file: rows of (time, v_in, v_out, i_src).
fn write_wave(path: &Path, rows: &[(f64, f64, f64, f64)]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    writeln!(file, "Time\tv(in)\tv(out)\ti(0)")?;
    writeln!(file, "s\tV\tV\tA")?;
    for &(t, v_in, v_out, i_src) in rows {
        writeln!(file, "{t:0.9}\t{v_in:0.9}\t{v_out:0.9}\t{i_src:0.9}")?;
    }
    Ok(())
}

fn main() -> std::io::Result<()> {
    let dir = std::env::args().nth(1).unwrap_or_else(|| "waves".to_string());
    let dir = Path::new(&dir);
    fs::create_dir_all(dir)?;

    let mut rng = SimpleRng::new(42);

    // 2 ms at 10 us per step
    let times: Vec<f64> = (0..200).map(|i| i as f64 * 10e-6).collect();

    let r_source = 1_000.0; // ohm
    let tau = 220e-6; // s
    let noise = 0.002; // V

    // RC charging from a 5 V step
    let step_rows: Vec<(f64, f64, f64, f64)> = times
        .iter()
        .map(|&t| {
            let v_in = 5.0;
            let v_out = rc_step(t, 5.0, tau) + rng.gauss(0.0, noise);
            (t, v_in, v_out, (v_in - v_out) / r_source)
        })
        .collect();
    let step_path = dir.join("rc_step.dat");
    write_wave(&step_path, &step_rows)?;
    println!("Wrote {} ({} samples)", step_path.display(), step_rows.len());

    // RC low-pass driven by a 2 kHz sine, roughly -3 dB with phase lag
    let sine_rows: Vec<(f64, f64, f64, f64)> = times
        .iter()
        .map(|&t| {
            let v_in = sine(t, 2.0, 2_000.0);
            let v_out = sine(t - tau / 2.0, 1.4, 2_000.0) + rng.gauss(0.0, noise);
            (t, v_in, v_out, (v_in - v_out) / r_source)
        })
        .collect();
    let sine_path = dir.join("rc_sine.dat");
    write_wave(&sine_path, &sine_rows)?;
    println!("Wrote {} ({} samples)", sine_path.display(), sine_rows.len());

    Ok(())
}
