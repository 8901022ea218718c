//! Bundled country metadata keyed by zone identifier.
//!
//! The table covers the zones users actually pick in a world clock; aliases,
//! `Etc/*` zones and abbreviation-style identifiers deliberately have no
//! entry, which surfaces as an absent country rather than an error.

use phf::phf_map;

/// Returns the country name for a zone identifier, if the table has one.
pub(super) fn lookup(id: &str) -> Option<&'static str> {
    COUNTRY_BY_ZONE.get(id).copied()
}

static COUNTRY_BY_ZONE: phf::Map<&'static str, &'static str> = phf_map! {
    "Africa/Abidjan" => "Ivory Coast",
    "Africa/Accra" => "Ghana",
    "Africa/Addis_Ababa" => "Ethiopia",
    "Africa/Algiers" => "Algeria",
    "Africa/Cairo" => "Egypt",
    "Africa/Casablanca" => "Morocco",
    "Africa/Dakar" => "Senegal",
    "Africa/Dar_es_Salaam" => "Tanzania",
    "Africa/Harare" => "Zimbabwe",
    "Africa/Johannesburg" => "South Africa",
    "Africa/Kampala" => "Uganda",
    "Africa/Khartoum" => "Sudan",
    "Africa/Kinshasa" => "Democratic Republic of the Congo",
    "Africa/Lagos" => "Nigeria",
    "Africa/Luanda" => "Angola",
    "Africa/Maputo" => "Mozambique",
    "Africa/Nairobi" => "Kenya",
    "Africa/Tripoli" => "Libya",
    "Africa/Tunis" => "Tunisia",
    "Africa/Windhoek" => "Namibia",
    "America/Anchorage" => "United States",
    "America/Argentina/Buenos_Aires" => "Argentina",
    "America/Argentina/Cordoba" => "Argentina",
    "America/Argentina/Mendoza" => "Argentina",
    "America/Asuncion" => "Paraguay",
    "America/Bogota" => "Colombia",
    "America/Caracas" => "Venezuela",
    "America/Chicago" => "United States",
    "America/Costa_Rica" => "Costa Rica",
    "America/Denver" => "United States",
    "America/Detroit" => "United States",
    "America/Edmonton" => "Canada",
    "America/El_Salvador" => "El Salvador",
    "America/Guatemala" => "Guatemala",
    "America/Guayaquil" => "Ecuador",
    "America/Halifax" => "Canada",
    "America/Havana" => "Cuba",
    "America/Jamaica" => "Jamaica",
    "America/La_Paz" => "Bolivia",
    "America/Lima" => "Peru",
    "America/Los_Angeles" => "United States",
    "America/Managua" => "Nicaragua",
    "America/Mexico_City" => "Mexico",
    "America/Montevideo" => "Uruguay",
    "America/New_York" => "United States",
    "America/Panama" => "Panama",
    "America/Phoenix" => "United States",
    "America/Port-au-Prince" => "Haiti",
    "America/Puerto_Rico" => "Puerto Rico",
    "America/Regina" => "Canada",
    "America/Santiago" => "Chile",
    "America/Santo_Domingo" => "Dominican Republic",
    "America/Sao_Paulo" => "Brazil",
    "America/St_Johns" => "Canada",
    "America/Tegucigalpa" => "Honduras",
    "America/Tijuana" => "Mexico",
    "America/Toronto" => "Canada",
    "America/Vancouver" => "Canada",
    "America/Winnipeg" => "Canada",
    "Asia/Almaty" => "Kazakhstan",
    "Asia/Amman" => "Jordan",
    "Asia/Baghdad" => "Iraq",
    "Asia/Bahrain" => "Bahrain",
    "Asia/Baku" => "Azerbaijan",
    "Asia/Bangkok" => "Thailand",
    "Asia/Beirut" => "Lebanon",
    "Asia/Bishkek" => "Kyrgyzstan",
    "Asia/Colombo" => "Sri Lanka",
    "Asia/Damascus" => "Syria",
    "Asia/Dhaka" => "Bangladesh",
    "Asia/Dubai" => "United Arab Emirates",
    "Asia/Dushanbe" => "Tajikistan",
    "Asia/Ho_Chi_Minh" => "Vietnam",
    "Asia/Hong_Kong" => "Hong Kong",
    "Asia/Irkutsk" => "Russia",
    "Asia/Jakarta" => "Indonesia",
    "Asia/Jerusalem" => "Israel",
    "Asia/Kabul" => "Afghanistan",
    "Asia/Karachi" => "Pakistan",
    "Asia/Kathmandu" => "Nepal",
    "Asia/Kolkata" => "India",
    "Asia/Kuala_Lumpur" => "Malaysia",
    "Asia/Kuwait" => "Kuwait",
    "Asia/Macau" => "Macau",
    "Asia/Makassar" => "Indonesia",
    "Asia/Manila" => "Philippines",
    "Asia/Muscat" => "Oman",
    "Asia/Nicosia" => "Cyprus",
    "Asia/Novosibirsk" => "Russia",
    "Asia/Phnom_Penh" => "Cambodia",
    "Asia/Pyongyang" => "North Korea",
    "Asia/Qatar" => "Qatar",
    "Asia/Riyadh" => "Saudi Arabia",
    "Asia/Seoul" => "South Korea",
    "Asia/Shanghai" => "China",
    "Asia/Singapore" => "Singapore",
    "Asia/Taipei" => "Taiwan",
    "Asia/Tashkent" => "Uzbekistan",
    "Asia/Tbilisi" => "Georgia",
    "Asia/Tehran" => "Iran",
    "Asia/Tokyo" => "Japan",
    "Asia/Ulaanbaatar" => "Mongolia",
    "Asia/Vientiane" => "Laos",
    "Asia/Vladivostok" => "Russia",
    "Asia/Yangon" => "Myanmar",
    "Asia/Yekaterinburg" => "Russia",
    "Asia/Yerevan" => "Armenia",
    "Atlantic/Azores" => "Portugal",
    "Atlantic/Bermuda" => "Bermuda",
    "Atlantic/Canary" => "Spain",
    "Atlantic/Cape_Verde" => "Cape Verde",
    "Atlantic/Reykjavik" => "Iceland",
    "Australia/Adelaide" => "Australia",
    "Australia/Brisbane" => "Australia",
    "Australia/Darwin" => "Australia",
    "Australia/Hobart" => "Australia",
    "Australia/Melbourne" => "Australia",
    "Australia/Perth" => "Australia",
    "Australia/Sydney" => "Australia",
    "Europe/Amsterdam" => "Netherlands",
    "Europe/Andorra" => "Andorra",
    "Europe/Athens" => "Greece",
    "Europe/Belgrade" => "Serbia",
    "Europe/Berlin" => "Germany",
    "Europe/Bratislava" => "Slovakia",
    "Europe/Brussels" => "Belgium",
    "Europe/Bucharest" => "Romania",
    "Europe/Budapest" => "Hungary",
    "Europe/Chisinau" => "Moldova",
    "Europe/Copenhagen" => "Denmark",
    "Europe/Dublin" => "Ireland",
    "Europe/Gibraltar" => "Gibraltar",
    "Europe/Helsinki" => "Finland",
    "Europe/Istanbul" => "Turkey",
    "Europe/Kaliningrad" => "Russia",
    "Europe/Kyiv" => "Ukraine",
    "Europe/Lisbon" => "Portugal",
    "Europe/Ljubljana" => "Slovenia",
    "Europe/London" => "United Kingdom",
    "Europe/Luxembourg" => "Luxembourg",
    "Europe/Madrid" => "Spain",
    "Europe/Malta" => "Malta",
    "Europe/Minsk" => "Belarus",
    "Europe/Monaco" => "Monaco",
    "Europe/Moscow" => "Russia",
    "Europe/Oslo" => "Norway",
    "Europe/Paris" => "France",
    "Europe/Prague" => "Czechia",
    "Europe/Riga" => "Latvia",
    "Europe/Rome" => "Italy",
    "Europe/Sarajevo" => "Bosnia and Herzegovina",
    "Europe/Skopje" => "North Macedonia",
    "Europe/Sofia" => "Bulgaria",
    "Europe/Stockholm" => "Sweden",
    "Europe/Tallinn" => "Estonia",
    "Europe/Tirane" => "Albania",
    "Europe/Vienna" => "Austria",
    "Europe/Vilnius" => "Lithuania",
    "Europe/Warsaw" => "Poland",
    "Europe/Zagreb" => "Croatia",
    "Europe/Zurich" => "Switzerland",
    "Indian/Maldives" => "Maldives",
    "Indian/Mauritius" => "Mauritius",
    "Pacific/Auckland" => "New Zealand",
    "Pacific/Chatham" => "New Zealand",
    "Pacific/Fiji" => "Fiji",
    "Pacific/Guam" => "Guam",
    "Pacific/Honolulu" => "United States",
    "Pacific/Kiritimati" => "Kiribati",
    "Pacific/Midway" => "United States Minor Outlying Islands",
    "Pacific/Noumea" => "New Caledonia",
    "Pacific/Pago_Pago" => "American Samoa",
    "Pacific/Port_Moresby" => "Papua New Guinea",
    "Pacific/Tahiti" => "French Polynesia",
    "Pacific/Tongatapu" => "Tonga",
};
