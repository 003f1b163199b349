// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// strmatch - STR profile similarity scoring for cell line authentication
pub struct Args {
    /// input STR profile files (.csv, .tsv, .txt, .xlsx)
    #[argh(positional)]
    pub input_files: Vec<String>,

    /// path to an STR database file; inputs are queried against it
    /// (default: inputs compared all-to-all)
    #[argh(option)]
    pub database: Option<String>,

    /// path to sample map in csv format for renaming. first column:
    /// sample names as given in the STR files, second: new names to
    /// assign. no header
    #[argh(option)]
    pub sample_map: Option<String>,

    /// output directory (default: ./strmatch)
    #[argh(option, default = "String::from(\"./strmatch\")")]
    pub output_dir: String,

    /// minimum Tanabe score to report as potential match in the summary (default: 80)
    #[argh(option, default = "80.0")]
    pub tan_threshold: f64,

    /// minimum Masters (vs. query) score to report as potential match (default: 80)
    #[argh(option, default = "80.0")]
    pub mas_q_threshold: f64,

    /// minimum Masters (vs. reference) score to report as potential match (default: 80)
    #[argh(option, default = "80.0")]
    pub mas_r_threshold: f64,

    /// number of markers with >2 alleles allowed before a sample is
    /// flagged for potential mixing (default: 3)
    #[argh(option, default = "3")]
    pub mix_threshold: usize,

    /// name of the sample identifier column (default: Sample)
    #[argh(option, default = "String::from(\"Sample\")")]
    pub sample_col: String,

    /// name of the marker identifier column, wide format only (default: Marker)
    #[argh(option, default = "String::from(\"Marker\")")]
    pub marker_col: String,

    /// name of the amelogenin column (default: AMEL)
    #[argh(option, default = "String::from(\"AMEL\")")]
    pub amel_col: String,

    /// disable harmonization of Penta marker spellings
    #[argh(switch)]
    pub no_penta_fix: bool,

    /// use amelogenin for similarity scoring
    #[argh(switch)]
    pub score_amel: bool,

    /// warn about marker names the CLASTR cross-reference service would reject
    #[argh(switch)]
    pub check_markers: bool,

    /// skip writing the HTML summary report
    #[argh(switch)]
    pub no_html: bool,

    /// number of threads (default: auto-detect)
    #[argh(option)]
    pub threads: Option<usize>,

    /// validate and ingest inputs without scoring (dry run)
    #[argh(switch)]
    pub dry_run: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}
