use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use outfit_harmony::{css_hex, evaluate, GarmentSlot, HarmonyReport, Mood};

type Err = Box<dyn Error>;

fn swatch_row(fh: &mut impl Write, colors: &[RGB8], width: u32,
              comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px; border-spacing: 0px\"><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                 css_hex(c))?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td>\
                  </tr></table><br/>")?;
    Ok(())
}

fn score_bar(fh: &mut impl Write, label: &str, value: f64)
             -> Result<(), Err> {
    writeln!(fh, "<div style=\"font-size: 12px\">{label}: {value}/10</div>\
                  <div style=\"width: 200px; height: 8px; \
                  background: #e5e7eb\">\
                  <div style=\"width: {}px; height: 8px; \
                  background: #22c55e\"></div></div>",
             (value * 20.).round() as u32)?;
    Ok(())
}

fn outfit(fh: &mut impl Write, name: &str,
          top: &str, bottom: &str, shoes: &str) -> Result<(), Err> {
    let report: HarmonyReport = evaluate(top, bottom, shoes);
    writeln!(fh, "<h4>{name} — {}</h4>", report.harmony)?;
    for (slot, hex) in [(GarmentSlot::Top, top),
                        (GarmentSlot::Bottom, bottom),
                        (GarmentSlot::Shoes, shoes)] {
        writeln!(fh, "<span style=\"display: inline-block; width: 60px; \
                      height: 24px; background-color: {hex}\"></span> \
                      {slot} {hex}<br/>")?;
    }
    score_bar(fh, "Complementary contrast", report.complementary_score)?;
    score_bar(fh, "Lightness balance", report.value_score)?;
    score_bar(fh, "Saturation balance", report.chroma_score)?;
    writeln!(fh, "<p style=\"max-width: 420px\">{}</p>", report.description)?;
    if !report.neutral_parts.is_empty() {
        let parts: Vec<_> = report.neutral_parts.iter()
            .map(|p| p.label()).collect();
        writeln!(fh, "<p>Neutral garments: {}</p>", parts.join(", "))?;
    }
    Ok(())
}

fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("harmony_report.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Outfit harmony: test {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;

    writeln!(fh, "<h3>Mood palettes</h3>")?;
    for mood in Mood::ALL {
        swatch_row(&mut fh, mood.palette(), 40, mood.label())?;
    }

    writeln!(fh, "<h3>Outfits</h3>")?;
    outfit(&mut fh, "Cobalt and camel", "#0000ff", "#ffa500", "#ffffff")?;
    outfit(&mut fh, "Golden hour", "#fbbf24", "#f97316", "#fef3c7")?;
    outfit(&mut fh, "Primary block", "#ff0000", "#00ff00", "#0000ff")?;
    outfit(&mut fh, "Monochrome", "#ffffff", "#e5e7eb", "#0f172a")?;
    outfit(&mut fh, "Still picking…", "", "#000", "#fff")?;

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
