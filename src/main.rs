use saju_core::{score_compatibility, BirthInfo, NaiveMoment};

fn main() {
    // 1990-03-15 08:30, Seoul
    let moment = NaiveMoment::new(1990, 3, 15, 8, 30, 0).expect("valid birth moment");
    let birth_info = BirthInfo::new(moment, "Seoul");

    match birth_info.generate_report() {
        Ok(report) => {
            println!("{:#?}", report);

            let partner_moment = NaiveMoment::new(1992, 10, 8, 21, 5, 0).expect("valid moment");
            let partner = BirthInfo::new(partner_moment, "Busan");
            if let Ok(partner_report) = partner.generate_report() {
                let result = score_compatibility(&report.four_pillars, &partner_report.four_pillars);
                println!("compatibility: {:.1}", result.score);
            }
        }
        Err(e) => eprintln!("Error: {:?}", e),
    }
}
