//! Common test utilities

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// GFEI-style average CO2 emissions (g/km); three header rows, latest year last
pub const EMISSIONS_CSV: &str = "\
GFEI C2 Average CO2 emissions per km,,,,
Unit: gCO2/km,,,,
Country,2005,2008,2015,2017
Argentina,175,170,150,148
Canada,225,220,210,206
France,152,140,113,112
India,150,142,128,130
Japan,170,150,120,125
Mexico,,,,
Portugal,145,135,110,109
United States,240,225,198,195
";

/// GFEI-style average fuel consumption (L/100km); years on the third row
pub const CONSUMPTION_CSV: &str = "\
GFEI C3 Average fuel consumption,,,,,,
Unit: Lge/100km,,,,,,
,2005,2008,2011,2014,2016,2017
Argentina,7.9,7.7,7.4,7.0,6.8,6.7
Canada,9.1,8.8,8.6,8.8,8.9,8.9
China,8.5,8.1,7.7,7.3,7.1,6.9
Germany,7.3,6.9,6.5,6.1,6.1,6.0
,,,,,,
Iceland,,,,7.2,7.0,
India,6.0,5.9,5.8,5.6,5.6,5.5
Malaysia,7.8,7.6,7.5,7.3,7.2,7.2
Peru,,7.0,7.1,,6.9,6.8
United States,10.5,10.0,9.3,9.0,8.8,8.7
";

/// World Bank-style pump price (USD/L); four id columns and a trailing blank
pub const PUMP_PRICE_CSV: &str = "\
Country Name,Country Code,Indicator Name,Indicator Code,2014,2016,2018,
Argentina,ARG,Pump price for gasoline (US$ per liter),EP.PMP.SGAS.CD,1.17,1.13,,
Canada,CAN,Pump price for gasoline (US$ per liter),EP.PMP.SGAS.CD,1.10,0.76,,
China,CHN,Pump price for gasoline (US$ per liter),EP.PMP.SGAS.CD,1.25,,,
Germany,DEU,Pump price for gasoline (US$ per liter),EP.PMP.SGAS.CD,1.79,1.40,,
India,IND,Pump price for gasoline (US$ per liter),EP.PMP.SGAS.CD,1.09,0.96,,
Malaysia,MYS,Pump price for gasoline (US$ per liter),EP.PMP.SGAS.CD,0.58,0.47,,
Peru,PER,Pump price for gasoline (US$ per liter),EP.PMP.SGAS.CD,1.38,1.10,,
United States,USA,Pump price for gasoline (US$ per liter),EP.PMP.SGAS.CD,0.92,0.66,,
";

/// Write `contents` to `name` inside `dir` and return the path
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// True if the file starts with the PNG signature
pub fn is_png(path: &Path) -> bool {
    std::fs::read(path)
        .map(|bytes| bytes.starts_with(b"\x89PNG\r\n\x1a\n"))
        .unwrap_or(false)
}
