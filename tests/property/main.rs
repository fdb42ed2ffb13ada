mod sample_set;
