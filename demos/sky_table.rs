use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use sky_color::{daily_schedule, ColorValue, Hour, RGBColor, ZipCode};

type Err = Box<dyn Error>;

fn table_of_colors(fh: &mut impl Write, colors: &[ColorValue],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td title=\"{c}\" style=\"width: {width}px; \
                      height: 30px; background-color: {c}\"></td>")?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for &c in colors {
        let c = c.to_gray();
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {c}\"></td>")?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("sky_table.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>sky-color: {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;

    writeln!(fh, "<h3>Palette</h3>")?;
    table_of_colors(&mut fh, &ColorValue::sky().colors(), 40, "zip mod 10")?;

    writeln!(fh, "<h3>By hour (columns 00:00 to 23:00)</h3>")?;
    for n in 0 .. 10 {
        let zip = ZipCode::parse(&n.to_string())?;
        table_of_colors(&mut fh, &daily_schedule(&zip), 20,
                        &format!("zip …{n}"))?;
    }

    writeln!(fh, "<p>")?;
    for h in Hour::all() {
        write!(fh, "{h} ")?;
    }
    writeln!(fh, "</p>\n</body>\n</html>")?;
    Ok(())
}
